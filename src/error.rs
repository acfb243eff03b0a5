use std::error::Error as StdError;
use std::fmt;
use std::io;

use ncdf_sys::{nc_strerror, NC_NOERR};

use crate::internal_prelude::*;

/// A non-zero status code returned by the netCDF library, with its message.
#[derive(Clone, PartialEq, Eq)]
pub struct NcError {
    code: c_int,
    message: String,
}

impl NcError {
    pub(crate) fn new(code: c_int) -> Self {
        let message = nclock!({
            let msg = nc_strerror(code);
            if msg.is_null() {
                format!("unknown netCDF error ({code})")
            } else {
                string_from_cstr(msg)
            }
        });
        Self { code, message }
    }

    /// The raw status code, e.g. `NC_EBADID`.
    pub fn code(&self) -> c_int {
        self.code
    }

    /// The message `nc_strerror()` associates with the status code.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for NcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.code)
    }
}

impl fmt::Display for NcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The error type for netCDF-related functions.
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// The netCDF library reported a failure (or a call was rejected locally because the
    /// library would have reported it).
    Netcdf(NcError),
    /// Invalid user input detected before reaching the library (e.g., unknown mode string).
    Argument(String),
}

/// A type for results generated by netCDF-related functions where the `Err` type is
/// set to `ncdf::Error`.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

impl Error {
    /// Builds a library error for the given status code.
    pub fn from_code(code: c_int) -> Self {
        Self::Netcdf(NcError::new(code))
    }

    /// Returns the netCDF status code, if this is a library error.
    pub fn code(&self) -> Option<c_int> {
        match *self {
            Self::Netcdf(ref err) => Some(err.code()),
            Self::Argument(_) => None,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(*self, Self::Argument(_))
    }
}

impl From<&str> for Error {
    fn from(desc: &str) -> Self {
        Self::Argument(desc.into())
    }
}

impl From<String> for Error {
    fn from(desc: String) -> Self {
        Self::Argument(desc)
    }
}

impl From<NcError> for Error {
    fn from(err: NcError) -> Self {
        Self::Netcdf(err)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Argument(ref desc) => f.write_str(desc),
            Self::Netcdf(ref err) => fmt::Debug::fmt(err, f),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Argument(ref desc) => f.write_str(desc),
            Self::Netcdf(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for Error {}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        Self::new(io::ErrorKind::Other, err)
    }
}

/// Converts a netCDF status code into a `Result`.
pub fn nccheck(status: c_int) -> Result<()> {
    if status == NC_NOERR {
        Ok(())
    } else {
        Err(Error::from_code(status))
    }
}

#[cfg(test)]
pub mod tests {
    use ncdf_sys::{nc_close, NC_EBADID, NC_EEXIST, NC_ENOTNC};
    use pretty_assertions::assert_eq;

    use crate::internal_prelude::*;

    use super::{nccheck, NcError};

    #[test]
    pub fn test_strerror() {
        let err = NcError::new(NC_EBADID);
        assert_eq!(err.code(), NC_EBADID);
        assert_eq!(err.message(), "NetCDF: Not a valid ID");
        assert_eq!(format!("{:?}", err), "NetCDF: Not a valid ID (status -33)");
        assert_eq!(NcError::new(NC_EEXIST).message(), "NetCDF: File exists && NC_NOCLOBBER");
        assert_eq!(NcError::new(NC_ENOTNC).message(), "NetCDF: Unknown file format");
    }

    #[test]
    pub fn test_nccheck() {
        assert!(nccheck(0).is_ok());
        let err = nccheck(NC_EBADID).unwrap_err();
        assert_eq!(err.code(), Some(NC_EBADID));
        assert!(!err.is_argument());
        assert_eq!(err.to_string(), "NetCDF: Not a valid ID");
    }

    #[test]
    pub fn test_nccall() {
        assert_nc_err!(nccall!(nc_close(-12345)), NC_EBADID);

        fn f() -> Result<u8> {
            nctry!(nc_close(-12345));
            Ok(1)
        }
        assert_nc_err!(f(), NC_EBADID);
    }

    #[test]
    pub fn test_argument_error() {
        let err = Error::from("invalid mode \"x\"");
        assert!(err.is_argument());
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "invalid mode \"x\"");
        let err: std::io::Error = err.into();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }
}
