use std::fmt::{self, Display};
use std::str::FromStr;

use bitflags::bitflags;

use ncdf_sys::{
    NC_64BIT_OFFSET, NC_CLASSIC_MODEL, NC_CLOBBER, NC_FORMAT_64BIT_OFFSET, NC_FORMAT_CLASSIC,
    NC_FORMAT_NETCDF4, NC_FORMAT_NETCDF4_CLASSIC, NC_NETCDF4, NC_NOCLOBBER, NC_NOWRITE, NC_SHARE,
    NC_WRITE,
};

use crate::internal_prelude::*;

bitflags! {
    /// The `cmode`/`omode` bitmask passed to `nc_create()` and `nc_open()`.
    pub struct OpenFlags: c_int {
        /// Read-only access.
        const NOWRITE = NC_NOWRITE;
        /// Read/write access.
        const WRITE = NC_WRITE;
        /// Overwrite an existing file on creation.
        const CLOBBER = NC_CLOBBER;
        /// Fail if the file already exists on creation.
        const NOCLOBBER = NC_NOCLOBBER;
        /// Enforce the classic data model on a netCDF-4 file.
        const CLASSIC_MODEL = NC_CLASSIC_MODEL;
        /// Use 64-bit file offsets.
        const OFFSET_64BIT = NC_64BIT_OFFSET;
        /// Share updates, limit caching.
        const SHARE = NC_SHARE;
        /// Use the HDF5-based netCDF-4 format.
        const NETCDF4 = NC_NETCDF4;
    }
}

/// Dataset opening mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// Open an existing dataset as read-only (`"r"`).
    Read,
    /// Create a new dataset (`"w"`); an existing file is replaced unless clobbering is off.
    Write,
    /// Open an existing dataset for reading and writing (`"r+"`).
    Update,
}

impl OpenMode {
    pub fn is_create(self) -> bool {
        self == Self::Write
    }

    pub fn is_writable(self) -> bool {
        self != Self::Read
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "r",
            Self::Write => "w",
            Self::Update => "r+",
        }
    }
}

impl Default for OpenMode {
    fn default() -> Self {
        Self::Read
    }
}

impl Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(Self::Read),
            "w" => Ok(Self::Write),
            "r+" => Ok(Self::Update),
            _ => fail!(format!("Invalid mode ({s:?}), must be 'r', 'w' or 'r+'")),
        }
    }
}

/// Underlying file format of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Classic netCDF-3 format (`NETCDF3`).
    Classic,
    /// 64-bit offset variant of the netCDF-3 format (`NETCDF3_64BIT`).
    Offset64,
    /// HDF5-based netCDF-4 format with the enhanced data model (`NETCDF4`).
    Netcdf4,
    /// HDF5-based netCDF-4 format restricted to the classic data model (`NETCDF4_CLASSIC`).
    Netcdf4Classic,
}

impl Format {
    /// Returns true for the netCDF-3 on-disk formats.
    pub fn is_netcdf3(self) -> bool {
        matches!(self, Self::Classic | Self::Offset64)
    }

    /// Returns true if the format allows more than one unlimited dimension.
    pub fn is_enhanced(self) -> bool {
        self == Self::Netcdf4
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "NETCDF3",
            Self::Offset64 => "NETCDF3_64BIT",
            Self::Netcdf4 => "NETCDF4",
            Self::Netcdf4Classic => "NETCDF4_CLASSIC",
        }
    }

    /// Maps a format identifier reported by `nc_inq_format()`.
    pub(crate) fn from_native(format: c_int) -> Option<Self> {
        match format {
            NC_FORMAT_CLASSIC => Some(Self::Classic),
            NC_FORMAT_64BIT_OFFSET => Some(Self::Offset64),
            NC_FORMAT_NETCDF4 => Some(Self::Netcdf4),
            NC_FORMAT_NETCDF4_CLASSIC => Some(Self::Netcdf4Classic),
            _ => None,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::Classic
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NETCDF3" => Ok(Self::Classic),
            "NETCDF3_64BIT" => Ok(Self::Offset64),
            "NETCDF4" => Ok(Self::Netcdf4),
            "NETCDF4_CLASSIC" => Ok(Self::Netcdf4Classic),
            _ => fail!(format!(
                "Invalid format ({s:?}), must be 'NETCDF3', 'NETCDF3_64BIT', 'NETCDF4' or \
                 'NETCDF4_CLASSIC'"
            )),
        }
    }
}

/// Translates opening options into the flag word expected by the library.
///
/// Clobbering only applies when creating, and sharing is only honoured by the netCDF-3
/// formats, so both are forced off otherwise.
pub(crate) fn open_flags(mode: OpenMode, clobber: bool, share: bool, format: Format) -> OpenFlags {
    let clobber = clobber && mode.is_create();
    let share = share && format.is_netcdf3();

    let mut flags = OpenFlags::empty();
    if share {
        flags |= OpenFlags::SHARE;
    }
    flags |= if mode.is_writable() { OpenFlags::WRITE } else { OpenFlags::NOWRITE };
    match format {
        Format::Classic => {}
        Format::Offset64 => flags |= OpenFlags::OFFSET_64BIT,
        Format::Netcdf4 => flags |= OpenFlags::NETCDF4,
        Format::Netcdf4Classic => flags |= OpenFlags::NETCDF4 | OpenFlags::CLASSIC_MODEL,
    }
    flags |= if clobber { OpenFlags::CLOBBER } else { OpenFlags::NOCLOBBER };
    flags
}
