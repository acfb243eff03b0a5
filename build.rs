use std::env;

fn main() {
    for (key, _) in env::vars() {
        let key = match key.as_str() {
            "DEP_NETCDF_HAS_NC4" => "feature=\"have-nc4\"".to_owned(),
            _ => continue,
        };
        println!("cargo:rustc-cfg={}", key);
    }
}
