use std::cell::Cell;
use std::fmt::{self, Debug};

use ncdf_sys::{nc_def_dim, nc_inq_dimlen, nc_inq_dimname, NC_MAX_NAME, NC_UNLIMITED};

use crate::internal_prelude::*;

/// A named axis of a netCDF dataset.
///
/// A dimension either has a fixed length set at definition time, or is unlimited and grows
/// as records are appended. The length of an unlimited dimension is queried from the
/// library on every call to [`len()`](Dimension::len), since it can change underneath the
/// owning dataset.
pub struct Dimension {
    owner: c_int,
    id: c_int,
    name: String,
    size: Cell<usize>,
    unlimited: bool,
}

impl Dimension {
    /// Loads an existing dimension of `owner` (a dataset or group id).
    pub(crate) fn load(owner: c_int, id: c_int, unlimited: bool) -> Result<Self> {
        // NC_MAX_NAME plus the terminating null byte
        let mut buf: Vec<c_char> = vec![0; NC_MAX_NAME as usize + 1];
        nccall!(nc_inq_dimname(owner, id, buf.as_mut_ptr()))?;
        let name = string_from_fixed_bytes(&buf, buf.len());
        let size = query_len(owner, id)?;
        Ok(Self { owner, id, name, size: Cell::new(size), unlimited })
    }

    /// Defines a new dimension in `owner`, which must be in define mode.
    ///
    /// A `size` of zero requests an unlimited dimension.
    pub(crate) fn define(owner: c_int, name: &str, size: usize) -> Result<Self> {
        let unlimited = size == 0;
        let c_name = to_cstring(name)?;
        let len = if unlimited { NC_UNLIMITED } else { size };
        let mut id: c_int = -1;
        nccall!(nc_def_dim(owner, c_name.as_ptr(), len, &mut id))?;
        tracing::debug!(ncid = owner, dimid = id, name, size, "defined dimension");
        Ok(Self { owner, id, name: name.to_owned(), size: Cell::new(size), unlimited })
    }

    /// Returns the current length of the dimension.
    ///
    /// For the unlimited dimension this is the number of records written so far.
    pub fn len(&self) -> Result<usize> {
        if self.unlimited {
            self.size.set(query_len(self.owner, self.id)?);
        }
        Ok(self.size.get())
    }

    /// An alias for `len()`.
    pub fn size(&self) -> Result<usize> {
        self.len()
    }

    /// Returns true if the current length is zero.
    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|n| n == 0)
    }

    pub fn is_unlimited(&self) -> bool {
        self.unlimited
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> c_int {
        self.id
    }

    /// The id of the dataset or group this dimension belongs to.
    pub fn owner(&self) -> c_int {
        self.owner
    }
}

fn query_len(owner: c_int, id: c_int) -> Result<usize> {
    let mut len: size_t = 0;
    nccall!(nc_inq_dimlen(owner, id, &mut len))?;
    Ok(len as _)
}

impl Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.unlimited {
            let size = self.size.get();
            write!(f, "<netCDF dimension: \"{}\" (unlimited, {size} records)>", self.name)
        } else {
            write!(f, "<netCDF dimension: \"{}\" ({})>", self.name, self.size.get())
        }
    }
}

#[cfg(test)]
pub mod tests {
    use ncdf_sys::{NC_EBADDIM, NC_EBADID, NC_ENAMEINUSE, NC_ENOTINDEFINE, NC_EUNLIMIT};
    use pretty_assertions::assert_eq;

    use crate::internal_prelude::*;

    #[test]
    pub fn test_define_fixed() {
        with_tmp_dataset(|ds| {
            let dim = Dimension::define(ds.id().unwrap(), "lat", 180).unwrap();
            assert_eq!(dim.name(), "lat");
            assert_eq!(dim.owner(), ds.id().unwrap());
            assert!(!dim.is_unlimited());
            assert_eq!(dim.len().unwrap(), 180);
            assert_eq!(dim.size().unwrap(), 180);
            assert_eq!(format!("{:?}", dim), "<netCDF dimension: \"lat\" (180)>");
        })
    }

    #[test]
    pub fn test_define_unlimited() {
        with_tmp_dataset(|ds| {
            let dim = Dimension::define(ds.id().unwrap(), "time", 0).unwrap();
            assert!(dim.is_unlimited());
            assert_eq!(dim.len().unwrap(), 0);
            assert!(dim.is_empty().unwrap());
            assert_eq!(
                format!("{:?}", dim),
                "<netCDF dimension: \"time\" (unlimited, 0 records)>"
            );
        })
    }

    #[test]
    pub fn test_define_errors() {
        with_tmp_dataset(|mut ds| {
            let ncid = ds.id().unwrap();
            let first = Dimension::define(ncid, "x", 3).unwrap();
            assert_nc_err!(Dimension::define(ncid, "x", 4), NC_ENAMEINUSE);
            Dimension::define(ncid, "t", 0).unwrap();
            assert_nc_err!(Dimension::define(ncid, "u", 0), NC_EUNLIMIT);
            assert_err_re!(Dimension::define(ncid, "a\0b", 1), "null byte in string");
            ds.enter_data_mode().unwrap();
            assert_nc_err!(Dimension::define(ncid, "y", 2), NC_ENOTINDEFINE);
            assert_eq!(first.len().unwrap(), 3);
        })
    }

    #[test]
    pub fn test_load() {
        with_tmp_dataset(|ds| {
            let ncid = ds.id().unwrap();
            let defined = Dimension::define(ncid, "station", 42).unwrap();
            let loaded = Dimension::load(ncid, defined.id(), false).unwrap();
            assert_eq!(loaded.name(), "station");
            assert_eq!(loaded.id(), defined.id());
            assert_eq!(loaded.len().unwrap(), 42);
            assert_nc_err!(Dimension::load(ncid, 17, false), NC_EBADDIM);
        })
    }

    #[test]
    pub fn test_load_closed_owner() {
        with_tmp_path(|path| {
            // Lock to ensure the id does not get handed out again in between
            nclock_s!({
                let mut ds = Dataset::create(&path).unwrap();
                let ncid = ds.id().unwrap();
                Dimension::define(ncid, "x", 1).unwrap();
                ds.close().unwrap();
                assert_nc_err!(Dimension::load(ncid, 0, false), NC_EBADID);
            });
        })
    }

    #[test]
    pub fn test_long_name() {
        with_tmp_dataset(|ds| {
            let ncid = ds.id().unwrap();
            let name = "n".repeat(256);
            let dim = Dimension::define(ncid, &name, 1).unwrap();
            let loaded = Dimension::load(ncid, dim.id(), false).unwrap();
            assert_eq!(loaded.name(), name);
        })
    }
}
