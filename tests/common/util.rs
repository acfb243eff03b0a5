use std::path::{Path, PathBuf};

use ncdf_sys::{nc_def_dim, nc_def_grp, nc_def_var, nc_put_vara_int, NC_INT};

pub fn tmp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Creates a classic dataset with a fixed `lat` dimension and an unlimited `time` dimension.
pub fn create_sample(path: &Path) -> ncdf::Result<()> {
    let mut ds = ncdf::Dataset::create(path)?;
    ds.add_dimension("lat", 4)?;
    ds.add_dimension("time", 0)?;
    ds.close()
}

/// Defines an integer variable spanning `dim`, returning its id.
pub fn define_int_var(ds: &ncdf::Dataset, name: &str, dim: &ncdf::Dimension) -> ncdf::Result<i32> {
    let ncid = ds.id()?;
    let c_name = std::ffi::CString::new(name).unwrap();
    let dimid = dim.id();
    let mut varid = -1;
    let status = ncdf::sync::sync(|| unsafe {
        nc_def_var(ncid, c_name.as_ptr(), NC_INT, 1, &dimid, &mut varid)
    });
    check(status)?;
    Ok(varid)
}

/// Writes `values` into a 1-D integer variable starting at record `start`.
pub fn put_records(ds: &ncdf::Dataset, varid: i32, start: usize, values: &[i32]) -> ncdf::Result<()> {
    let ncid = ds.id()?;
    let start = [start];
    let count = [values.len()];
    let status = ncdf::sync::sync(|| unsafe {
        nc_put_vara_int(ncid, varid, start.as_ptr(), count.as_ptr(), values.as_ptr())
    });
    check(status)
}

/// Defines a subgroup of a netCDF-4 dataset holding a single fixed dimension.
pub fn define_group_dim(ds: &ncdf::Dataset, group: &str, dim: &str, len: usize) -> ncdf::Result<()> {
    let ncid = ds.id()?;
    let c_group = std::ffi::CString::new(group).unwrap();
    let c_dim = std::ffi::CString::new(dim).unwrap();
    let (mut grpid, mut dimid) = (-1, -1);
    check(ncdf::sync::sync(|| unsafe { nc_def_grp(ncid, c_group.as_ptr(), &mut grpid) }))?;
    check(ncdf::sync::sync(|| unsafe { nc_def_dim(grpid, c_dim.as_ptr(), len, &mut dimid) }))
}

fn check(status: i32) -> ncdf::Result<()> {
    if status == 0 {
        Ok(())
    } else {
        Err(ncdf::Error::from_code(status))
    }
}
