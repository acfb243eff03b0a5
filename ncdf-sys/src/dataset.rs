//! Creating, opening and closing datasets, define/data mode switches
use crate::internal_prelude::*;

/* ioflags bits for nc_create and nc_open */
pub const NC_NOWRITE: c_int = 0x0000;
pub const NC_WRITE: c_int = 0x0001;
pub const NC_CLOBBER: c_int = 0x0000;
pub const NC_NOCLOBBER: c_int = 0x0004;
pub const NC_DISKLESS: c_int = 0x0008;
pub const NC_MMAP: c_int = 0x0010;
pub const NC_64BIT_DATA: c_int = 0x0020;
pub const NC_CLASSIC_MODEL: c_int = 0x0100;
pub const NC_64BIT_OFFSET: c_int = 0x0200;
#[deprecated(note = "ignored by the library, reserved for future use")]
pub const NC_LOCK: c_int = 0x0400;
pub const NC_SHARE: c_int = 0x0800;
pub const NC_NETCDF4: c_int = 0x1000;
pub const NC_MPIIO: c_int = 0x2000;
#[deprecated(note = "removed from netCDF 4.6.2")]
pub const NC_MPIPOSIX: c_int = 0x4000;
pub const NC_PNETCDF: c_int = NC_MPIIO;

extern "C" {
    pub fn nc_create(path: *const c_char, cmode: c_int, ncidp: *mut c_int) -> c_int;
    pub fn nc_open(path: *const c_char, mode: c_int, ncidp: *mut c_int) -> c_int;
    pub fn nc_redef(ncid: c_int) -> c_int;
    pub fn nc_enddef(ncid: c_int) -> c_int;
    pub fn nc_sync(ncid: c_int) -> c_int;
    pub fn nc_abort(ncid: c_int) -> c_int;
    pub fn nc_close(ncid: c_int) -> c_int;
    pub fn nc_inq_format(ncid: c_int, formatp: *mut c_int) -> c_int;
    pub fn nc_inq_path(ncid: c_int, pathlen: *mut size_t, path: *mut c_char) -> c_int;
}
