use std::env;
use std::fmt::{self, Debug};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;

fn feature_enabled(feature: &str) -> bool {
    env::var(format!("CARGO_FEATURE_{}", feature)).is_ok()
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub micro: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, micro: u8) -> Self {
        Self { major, minor, micro }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let re = Regex::new(r"^(\d+)\.(\d+)\.(\d+)").ok()?;
        let captures = re.captures(s.trim())?;
        Some(Self {
            major: captures.get(1).and_then(|c| c.as_str().parse::<u8>().ok())?,
            minor: captures.get(2).and_then(|c| c.as_str().parse::<u8>().ok())?,
            micro: captures.get(3).and_then(|c| c.as_str().parse::<u8>().ok())?,
        })
    }

    pub fn is_valid(self) -> bool {
        self >= Self { major: 4, minor: 1, micro: 0 }
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

fn run_command(cmd: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(cmd).args(args).output().ok()?;
    if out.status.success() {
        String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
    } else {
        None
    }
}

fn is_inc_dir<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().join("netcdf.h").is_file()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Header {
    pub has_nc4: bool,
    pub version: Version,
}

impl Header {
    /// Parses `netcdf_meta.h`; older installs without it are assumed to be netCDF-3 only.
    pub fn parse<P: AsRef<Path>>(inc_dir: P) -> Option<Self> {
        let header = inc_dir.as_ref().join("netcdf_meta.h");
        println!("Parsing netCDF config from:\n    {:?}", header);
        let contents = fs::read_to_string(header).ok()?;
        let mut hdr = Self::default();

        let num_def_re = Regex::new(r"(?m)^#define\s+(NC_[A-Z0-9_]+)\s+([0-9]+)").unwrap();
        let (mut major, mut minor, mut micro) = (0, 0, 0);
        for captures in num_def_re.captures_iter(&contents) {
            let name = captures.get(1).unwrap().as_str();
            let value = captures.get(2).unwrap().as_str().parse::<u8>().unwrap_or(0);
            match name {
                "NC_VERSION_MAJOR" => major = value,
                "NC_VERSION_MINOR" => minor = value,
                "NC_VERSION_PATCH" => micro = value,
                "NC_HAS_NC4" => hdr.has_nc4 = value > 0,
                _ => {}
            }
        }
        hdr.version = Version::new(major, minor, micro);
        assert!(hdr.version.is_valid(), "Invalid netCDF version in the header: {:?}", hdr.version);
        Some(hdr)
    }

    /// Falls back to asking `nc-config` when the meta header is unavailable.
    pub fn from_nc_config() -> Option<Self> {
        let version = run_command("nc-config", &["--version"])?;
        let version = Version::parse(version.trim_start_matches("netCDF").trim())?;
        let has_nc4 = run_command("nc-config", &["--has-nc4"]).map_or(false, |s| s == "yes");
        Some(Self { has_nc4, version })
    }
}

#[derive(Clone, Debug, Default)]
pub struct LibrarySearcher {
    pub inc_dir: Option<PathBuf>,
    pub link_paths: Vec<PathBuf>,
    pub user_provided_dir: bool,
}

impl LibrarySearcher {
    pub fn new_from_env() -> Self {
        let mut config = Self::default();
        if let Some(var) = env::var_os("NETCDF_DIR") {
            println!("Setting netCDF root from environment variable:");
            println!("    NETCDF_DIR = {:?}", var);
            let root = PathBuf::from(var);
            assert!(
                is_inc_dir(root.join("include")),
                "Invalid netCDF root directory: {:?}",
                root
            );
            config.inc_dir = Some(root.join("include"));
            config.link_paths.push(root.join("lib"));
            config.user_provided_dir = true;
        }
        config
    }

    pub fn find_via_pkg_config(&mut self) {
        if self.inc_dir.is_some() {
            return;
        }
        let mut pc = pkg_config::Config::new();
        pc.cargo_metadata(false);
        println!("Attempting to find netCDF via pkg-config...");
        if let Ok(library) = pc.probe("netcdf") {
            println!("Found netCDF pkg-config entry");
            for dir in &library.include_paths {
                if is_inc_dir(dir) {
                    self.inc_dir = Some(dir.into());
                    break;
                }
            }
            self.link_paths = library.link_paths;
        }
    }

    pub fn find_via_nc_config(&mut self) {
        if self.inc_dir.is_some() {
            return;
        }
        println!("Attempting to find netCDF via nc-config...");
        if let Some(inc_dir) = run_command("nc-config", &["--includedir"]) {
            if is_inc_dir(&inc_dir) {
                self.inc_dir = Some(inc_dir.into());
            }
        }
        if let Some(libdir) = run_command("nc-config", &["--libdir"]) {
            self.link_paths.push(libdir.into());
        }
    }

    pub fn find_in_default_location(&mut self) {
        if self.inc_dir.is_some() {
            return;
        }
        for (inc_dir, lib_dir) in &[
            ("/usr/include", "/usr/lib/x86_64-linux-gnu"),
            ("/usr/include", "/usr/lib64"),
            ("/usr/local/include", "/usr/local/lib"),
            ("/opt/homebrew/include", "/opt/homebrew/lib"),
        ] {
            if is_inc_dir(inc_dir) {
                println!("Found netCDF headers at:\n    {:?}", inc_dir);
                self.inc_dir = Some(inc_dir.into());
                self.link_paths.push(lib_dir.into());
                break;
            }
        }
    }

    pub fn finalize(mut self) -> Config {
        self.find_via_pkg_config();
        self.find_via_nc_config();
        self.find_in_default_location();
        let header = self
            .inc_dir
            .as_ref()
            .and_then(Header::parse)
            .or_else(Header::from_nc_config)
            .unwrap_or_else(|| {
                panic!("Unable to determine netCDF location (set NETCDF_DIR to specify it).")
            });
        if self.user_provided_dir {
            if let Some(lib_dir) = self.link_paths.first() {
                println!("Custom NETCDF_DIR provided; rpath can be set via:");
                println!("    RUSTFLAGS=\"-C link-args=-Wl,-rpath,{}\"", lib_dir.display());
            }
        }
        Config { inc_dir: self.inc_dir, link_paths: self.link_paths, header }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub inc_dir: Option<PathBuf>,
    pub link_paths: Vec<PathBuf>,
    pub header: Header,
}

impl Config {
    pub fn emit_link_flags(&self) {
        let kind = if feature_enabled("STATIC") { "static" } else { "dylib" };
        println!("cargo:rustc-link-lib={}=netcdf", kind);
        for dir in &self.link_paths {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        println!("cargo:rerun-if-env-changed=NETCDF_DIR");
        if let Some(ref inc_dir) = self.inc_dir {
            println!("cargo:include={}", inc_dir.display());
        }
        println!("cargo:library=netcdf");
    }

    pub fn emit_cfg_flags(&self) {
        if self.header.has_nc4 {
            println!("cargo:has_nc4=1");
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let config = LibrarySearcher::new_from_env().finalize();
    println!("{:#?}", config);
    config.emit_link_flags();
    config.emit_cfg_flags();
}
