//! Raw FFI bindings to the netCDF C library.
//!
//! Only the entry points used by `ncdf` are declared here: library-level queries, dataset
//! lifecycle and dimension introspection/definition, plus the handful of variable and group
//! calls the test suite needs to build fixtures.
#![allow(non_camel_case_types, non_snake_case, dead_code)]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::unreadable_literal))]
#![cfg_attr(feature = "cargo-clippy", allow(clippy::missing_safety_doc))]

pub mod dataset;
pub mod dim;
pub mod group;
pub mod nc;
pub mod var;

pub use crate::dataset::*;
pub use crate::dim::*;
pub use crate::group::*;
pub use crate::nc::*;
pub use crate::var::*;

#[allow(non_camel_case_types)]
mod internal_prelude {
    pub use crate::nc::nc_type;
    pub use libc::size_t;
    pub use std::os::raw::{c_char, c_int, c_void};
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::{nc_inq_libvers, nc_strerror, NC_EBADID, NC_NOERR};

    #[test]
    pub fn test_strerror() {
        let msg = unsafe { CStr::from_ptr(nc_strerror(NC_NOERR)) };
        assert_eq!(msg.to_str().unwrap(), "No error");
        let msg = unsafe { CStr::from_ptr(nc_strerror(NC_EBADID)) };
        assert_eq!(msg.to_str().unwrap(), "NetCDF: Not a valid ID");
    }

    #[test]
    pub fn test_libvers() {
        let vers = unsafe { CStr::from_ptr(nc_inq_libvers()) };
        assert!(vers.to_str().unwrap().starts_with('4'));
    }
}
