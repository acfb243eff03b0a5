//! Dimension introspection and definition
use crate::internal_prelude::*;

extern "C" {
    pub fn nc_def_dim(ncid: c_int, name: *const c_char, len: size_t, idp: *mut c_int) -> c_int;
    pub fn nc_inq_dimid(ncid: c_int, name: *const c_char, idp: *mut c_int) -> c_int;
    pub fn nc_inq_dim(ncid: c_int, dimid: c_int, name: *mut c_char, lenp: *mut size_t) -> c_int;
    pub fn nc_inq_dimname(ncid: c_int, dimid: c_int, name: *mut c_char) -> c_int;
    pub fn nc_inq_dimlen(ncid: c_int, dimid: c_int, lenp: *mut size_t) -> c_int;
    pub fn nc_inq_ndims(ncid: c_int, ndimsp: *mut c_int) -> c_int;
    pub fn nc_inq_unlimdim(ncid: c_int, unlimdimidp: *mut c_int) -> c_int;
    pub fn nc_inq_dimids(
        ncid: c_int, ndims: *mut c_int, dimids: *mut c_int, include_parents: c_int,
    ) -> c_int;
    pub fn nc_rename_dim(ncid: c_int, dimid: c_int, name: *const c_char) -> c_int;
}

extern "C" {
    /// Only available in builds with netCDF-4 support.
    pub fn nc_inq_unlimdims(ncid: c_int, nunlimdimsp: *mut c_int, unlimdimidsp: *mut c_int)
        -> c_int;
}
