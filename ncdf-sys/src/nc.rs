//! Library-wide types, limits, format identifiers and status codes
use crate::internal_prelude::*;

pub type nc_type = c_int;

pub const NC_NAT: nc_type = 0;
pub const NC_BYTE: nc_type = 1;
pub const NC_CHAR: nc_type = 2;
pub const NC_SHORT: nc_type = 3;
pub const NC_INT: nc_type = 4;
pub const NC_FLOAT: nc_type = 5;
pub const NC_DOUBLE: nc_type = 6;

/* limits */
pub const NC_MAX_DIMS: c_int = 1024;
pub const NC_MAX_NAME: c_int = 256;
pub const NC_MAX_VAR_DIMS: c_int = 1024;

/// Length passed to `nc_def_dim` to request an unlimited dimension.
pub const NC_UNLIMITED: size_t = 0;

/* format identifiers reported by nc_inq_format */
pub const NC_FORMAT_CLASSIC: c_int = 1;
pub const NC_FORMAT_64BIT_OFFSET: c_int = 2;
pub const NC_FORMAT_NETCDF4: c_int = 3;
pub const NC_FORMAT_NETCDF4_CLASSIC: c_int = 4;
pub const NC_FORMAT_64BIT_DATA: c_int = 5;

/* status codes */
pub const NC_NOERR: c_int = 0;
pub const NC2_ERR: c_int = -1;
pub const NC_EBADID: c_int = -33;
pub const NC_ENFILE: c_int = -34;
pub const NC_EEXIST: c_int = -35;
pub const NC_EINVAL: c_int = -36;
pub const NC_EPERM: c_int = -37;
pub const NC_ENOTINDEFINE: c_int = -38;
pub const NC_EINDEFINE: c_int = -39;
pub const NC_EINVALCOORDS: c_int = -40;
pub const NC_EMAXDIMS: c_int = -41;
pub const NC_ENAMEINUSE: c_int = -42;
pub const NC_ENOTATT: c_int = -43;
pub const NC_EMAXATTS: c_int = -44;
pub const NC_EBADTYPE: c_int = -45;
pub const NC_EBADDIM: c_int = -46;
pub const NC_EUNLIMPOS: c_int = -47;
pub const NC_EMAXVARS: c_int = -48;
pub const NC_ENOTVAR: c_int = -49;
pub const NC_EGLOBAL: c_int = -50;
pub const NC_ENOTNC: c_int = -51;
pub const NC_ESTS: c_int = -52;
pub const NC_EMAXNAME: c_int = -53;
pub const NC_EUNLIMIT: c_int = -54;
pub const NC_ENORECVARS: c_int = -55;
pub const NC_ECHAR: c_int = -56;
pub const NC_EEDGE: c_int = -57;
pub const NC_ESTRIDE: c_int = -58;
pub const NC_EBADNAME: c_int = -59;
pub const NC_ERANGE: c_int = -60;
pub const NC_ENOMEM: c_int = -61;
pub const NC_EVARSIZE: c_int = -62;
pub const NC_EDIMSIZE: c_int = -63;
pub const NC_ETRUNC: c_int = -64;
pub const NC_EAXISTYPE: c_int = -65;
pub const NC_ENOTNC4: c_int = -111;
pub const NC_ESTRICTNC3: c_int = -112;
pub const NC_ENOTNC3: c_int = -113;

extern "C" {
    pub fn nc_inq_libvers() -> *const c_char;
    pub fn nc_strerror(ncerr: c_int) -> *const c_char;
}
