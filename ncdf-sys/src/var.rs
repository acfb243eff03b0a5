//! Minimal variable surface (definition and integer hyperslab writes)
use crate::internal_prelude::*;

extern "C" {
    pub fn nc_def_var(
        ncid: c_int, name: *const c_char, xtype: nc_type, ndims: c_int, dimidsp: *const c_int,
        varidp: *mut c_int,
    ) -> c_int;
    pub fn nc_inq_nvars(ncid: c_int, nvarsp: *mut c_int) -> c_int;
    pub fn nc_put_vara_int(
        ncid: c_int, varid: c_int, startp: *const size_t, countp: *const size_t, op: *const c_int,
    ) -> c_int;
    pub fn nc_get_vara_int(
        ncid: c_int, varid: c_int, startp: *const size_t, countp: *const size_t, ip: *mut c_int,
    ) -> c_int;
}
