//! netCDF for Rust.
//!
//! This crate provides safe Rust bindings for the `netCDF` C library: creating and opening
//! datasets, switching between define mode and data mode, and introspecting or defining
//! dimensions. Status codes returned by the library are turned into [`Error`] values
//! carrying the library's own message.
//!
//! - The native library is not thread-safe; every call into it is serialized through a
//!   global reentrant mutex.
//! - Dataset identifiers are owned by a [`Dataset`] value and released exactly once.
//!
//! Direct low-level bindings are available in the `ncdf-sys` crate.
//!
//! ```no_run
//! # fn main() -> ncdf::Result<()> {
//! let mut ds = ncdf::Dataset::create("example.nc")?;
//! ds.add_dimension("time", 0)?;
//! ds.add_dimension("lat", 180)?;
//! ds.enter_data_mode()?;
//! assert!(ds.dimension("time").unwrap().is_unlimited());
//! ds.close()?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(feature = "cargo-clippy", warn(clippy::pedantic))]
#![cfg_attr(feature = "cargo-clippy", warn(clippy::all))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::module_name_repetitions))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::cast_sign_loss))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::cast_possible_truncation))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::cast_possible_wrap))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::missing_errors_doc))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::must_use_candidate))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::wildcard_imports))]
#![cfg_attr(not(test), allow(dead_code))]

mod export {
    pub use crate::{
        error::{Error, NcError, Result},
        hl::{Dataset, DatasetBuilder, DefineMode, Dimension, Format, OpenFlags, OpenMode},
    };

    pub mod dataset {
        pub use crate::hl::dataset::{Dataset, DatasetBuilder, DefineMode};
        pub use crate::hl::format::{Format, OpenFlags, OpenMode};
    }
}

pub use crate::export::*;

#[macro_use]
mod macros;

mod error;
mod handle;
#[doc(hidden)]
pub mod sync;
mod util;

mod hl;

mod internal_prelude {
    pub use libc::size_t;
    pub use std::os::raw::{c_char, c_int};

    pub use crate::{
        export::*,
        handle::Handle,
        util::{path_to_cstring, string_from_cstr, string_from_fixed_bytes, to_cstring},
    };

    #[cfg(test)]
    pub use crate::test::{with_tmp_dataset, with_tmp_dir, with_tmp_path};
}


/// Returns the full version string reported by the netCDF library.
pub fn library_version_string() -> String {
    nclock!(string_from_cstr_or_empty(ncdf_sys::nc_inq_libvers()))
}

unsafe fn string_from_cstr_or_empty(s: *const internal_prelude::c_char) -> String {
    if s.is_null() {
        String::new()
    } else {
        util::string_from_cstr(s)
    }
}

/// Returns the runtime version of the netCDF library as `(major, minor, patch)`.
///
/// Components that cannot be parsed are reported as zero.
pub fn library_version() -> (u8, u8, u8) {
    parse_version(&library_version_string())
}

fn parse_version(s: &str) -> (u8, u8, u8) {
    // e.g. "4.9.2 of Mar 14 2023 12:00:00 $"
    let mut parts = s.split_whitespace().next().unwrap_or("").split('.').map(|p| {
        p.chars().take_while(char::is_ascii_digit).collect::<String>().parse::<u8>().unwrap_or(0)
    });
    (parts.next().unwrap_or(0), parts.next().unwrap_or(0), parts.next().unwrap_or(0))
}

#[cfg(test)]
pub mod tests {
    use crate::{library_version, library_version_string, parse_version};

    #[test]
    pub fn test_library_version() {
        assert!(library_version() >= (4, 0, 0));
        assert!(library_version_string().starts_with('4'));
    }

    #[test]
    pub fn test_parse_version() {
        assert_eq!(parse_version("4.9.2 of Mar 14 2023 12:00:00 $"), (4, 9, 2));
        assert_eq!(parse_version("4.7.4-development"), (4, 7, 4));
        assert_eq!(parse_version("4.3"), (4, 3, 0));
        assert_eq!(parse_version(""), (0, 0, 0));
    }
}
