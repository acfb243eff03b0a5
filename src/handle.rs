use ncdf_sys::{nc_close, NC_EBADID};

use crate::internal_prelude::*;

/// Exclusive owner of a netCDF dataset identifier.
///
/// The identifier is released exactly once: either by an explicit `close()` or when the
/// handle is dropped. After that every accessor reports `NC_EBADID` without calling into
/// the library, since the library is free to hand the same integer to another dataset.
#[derive(Debug)]
pub struct Handle {
    id: Option<c_int>,
}

impl Handle {
    /// Takes ownership of an identifier returned by `nc_open()` / `nc_create()`.
    pub(crate) fn new(id: c_int) -> Self {
        Self { id: Some(id) }
    }

    /// Returns the identifier, or a library error if the handle has been closed.
    pub fn id(&self) -> Result<c_int> {
        match self.id {
            Some(id) => Ok(id),
            None => Err(Error::from_code(NC_EBADID)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    /// Releases the identifier.
    ///
    /// The handle is consumed even when `nc_close()` fails: the library aborts the dataset
    /// in that case and the identifier is no longer ours.
    pub fn close(&mut self) -> Result<()> {
        let id = self.id.take().ok_or_else(|| Error::from_code(NC_EBADID))?;
        tracing::debug!(ncid = id, "closing dataset");
        nccall!(nc_close(id))
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if let Err(err) = nccall!(nc_close(id)) {
                tracing::warn!(ncid = id, %err, "failed to close dataset on drop");
            }
        }
    }
}
