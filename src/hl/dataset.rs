use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};

use ncdf_sys::{
    nc_create, nc_enddef, nc_inq_dimids, nc_inq_format, nc_inq_unlimdim, nc_open, nc_redef,
    nc_sync, NC_EINDEFINE, NC_EMAXNAME, NC_ENAMEINUSE, NC_ENOTINDEFINE, NC_EPERM, NC_MAX_NAME,
};

use crate::hl::format::open_flags;
use crate::internal_prelude::*;

/// The mode a dataset is in, as last set through this API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineMode {
    /// Dimensions (and other metadata) may be added or renamed.
    Define,
    /// Data may be read or written; the structure is frozen.
    Data,
}

impl DefineMode {
    fn to_define(self) -> Result<Self> {
        match self {
            Self::Define => nc_fail!(NC_EINDEFINE),
            Self::Data => Ok(Self::Define),
        }
    }

    fn to_data(self) -> Result<Self> {
        match self {
            Self::Define => Ok(Self::Data),
            Self::Data => nc_fail!(NC_ENOTINDEFINE),
        }
    }
}

/// netCDF dataset.
pub struct Dataset {
    handle: Handle,
    path: PathBuf,
    access: OpenMode,
    format: Format,
    mode: DefineMode,
    dimensions: BTreeMap<String, Dimension>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_open() {
            return f.write_str("<netCDF dataset: closed>");
        }
        let basename = match self.path.file_name() {
            Some(s) => s.to_string_lossy().into_owned(),
            None => String::new(),
        };
        let access = if self.is_read_only() { "read-only" } else { "read/write" };
        write!(f, "<netCDF dataset: \"{basename}\" ({access}, {})>", self.format)
    }
}

impl Dataset {
    /// Opens a dataset as read-only, file must exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_as(path, OpenMode::Read)
    }

    /// Opens a dataset for reading and writing, file must exist.
    pub fn open_rw<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_as(path, OpenMode::Update)
    }

    /// Creates a classic dataset, replacing an existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_as(path, OpenMode::Write)
    }

    /// Creates a classic dataset, fails if the file exists.
    pub fn create_excl<P: AsRef<Path>>(path: P) -> Result<Self> {
        DatasetBuilder::new().clobber(false).open_as(path, OpenMode::Write)
    }

    /// Opens a dataset in a given mode with default options.
    pub fn open_as<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        DatasetBuilder::new().open_as(path, mode)
    }

    /// Opens or creates a dataset with every option spelled out.
    pub fn open_or_create<P: AsRef<Path>>(
        path: P, mode: OpenMode, clobber: bool, share: bool, format: Format,
    ) -> Result<Self> {
        DatasetBuilder::new().clobber(clobber).share(share).format(format).open_as(path, mode)
    }

    /// Opens a dataset with custom options.
    pub fn with_options() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Returns the native dataset id, or a library error if the dataset is closed.
    pub fn id(&self) -> Result<c_int> {
        self.handle.id()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// The mode the dataset was opened with.
    pub fn access(&self) -> OpenMode {
        self.access
    }

    pub fn is_read_only(&self) -> bool {
        !self.access.is_writable()
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_open()
    }

    /// Returns true if the dataset is in define mode.
    ///
    /// This reflects the last transition made through this API; no library call is made.
    pub fn is_in_define_mode(&self) -> bool {
        self.mode == DefineMode::Define
    }

    pub fn define_mode(&self) -> DefineMode {
        self.mode
    }

    /// Enters define mode, so that dimensions can be added.
    ///
    /// Fails if the dataset is closed, already in define mode, or was opened read-only.
    pub fn enter_define_mode(&mut self) -> Result<()> {
        let id = self.handle.id()?;
        let mode = self.mode.to_define()?;
        if self.is_read_only() {
            nc_fail!(NC_EPERM);
        }
        nccall!(nc_redef(id))?;
        tracing::debug!(ncid = id, "entered define mode");
        self.mode = mode;
        Ok(())
    }

    /// Leaves define mode, so that data can be read or written.
    ///
    /// Fails if the dataset is closed or already in data mode; the library may also reject
    /// the transition if a definition exceeds the size limits of the format.
    pub fn enter_data_mode(&mut self) -> Result<()> {
        let id = self.handle.id()?;
        let mode = self.mode.to_data()?;
        nccall!(nc_enddef(id))?;
        tracing::debug!(ncid = id, "entered data mode");
        self.mode = mode;
        Ok(())
    }

    /// Writes all buffered data to disk.
    ///
    /// Fails if the dataset is closed or in define mode.
    pub fn flush(&self) -> Result<()> {
        let id = self.handle.id()?;
        if self.is_in_define_mode() {
            nc_fail!(NC_EINDEFINE);
        }
        nccall!(nc_sync(id))
    }

    /// A short alias for `flush()`.
    pub fn sync(&self) -> Result<()> {
        self.flush()
    }

    /// Closes the dataset.
    ///
    /// A dataset still in define mode is switched to data mode by the library first; a
    /// failure there is reported as the close error. The dataset is unusable afterwards
    /// in either case.
    pub fn close(&mut self) -> Result<()> {
        let res = self.handle.close();
        self.dimensions.clear();
        self.mode = DefineMode::Data;
        res
    }

    /// Returns all dimensions of the dataset, indexed by name.
    pub fn dimensions(&self) -> &BTreeMap<String, Dimension> {
        &self.dimensions
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    /// Defines a new dimension; a `size` of zero makes it unlimited.
    ///
    /// The dataset must be in define mode. Classic formats allow a single unlimited
    /// dimension, which is enforced by the library.
    pub fn add_dimension(&mut self, name: &str, size: usize) -> Result<&Dimension> {
        let id = self.handle.id()?;
        if !self.is_in_define_mode() {
            nc_fail!(NC_ENOTINDEFINE);
        }
        if name.len() > NC_MAX_NAME as usize {
            nc_fail!(NC_EMAXNAME);
        }
        if self.dimensions.contains_key(name) {
            nc_fail!(NC_ENAMEINUSE);
        }
        let dim = Dimension::define(id, name, size)?;
        Ok(self.dimensions.entry(name.to_owned()).or_insert(dim))
    }

    fn load_dimensions(&mut self) -> Result<()> {
        let id = self.handle.id()?;
        let unlimited = unlimited_dim_ids(id, self.format)?;
        for dim_id in dim_ids(id)? {
            let dim = Dimension::load(id, dim_id, unlimited.contains(&dim_id))?;
            self.dimensions.insert(dim.name().to_owned(), dim);
        }
        Ok(())
    }
}

/// Ids of the dimensions visible in `ncid` itself, excluding those of parent groups.
///
/// Ids are not contiguous once subgroups define dimensions of their own.
fn dim_ids(ncid: c_int) -> Result<Vec<c_int>> {
    let mut count: c_int = 0;
    nccall!(nc_inq_dimids(ncid, &mut count, std::ptr::null_mut(), 0))?;
    let mut ids: Vec<c_int> = vec![-1; count.max(0) as usize];
    if !ids.is_empty() {
        nccall!(nc_inq_dimids(ncid, std::ptr::null_mut(), ids.as_mut_ptr(), 0))?;
    }
    Ok(ids)
}

fn unlimited_dim_ids(ncid: c_int, format: Format) -> Result<BTreeSet<c_int>> {
    if format.is_enhanced() {
        unlimited_dim_ids_enhanced(ncid)
    } else {
        // only one unlimited dimension, -1 if there is none
        let mut dim_id: c_int = -1;
        nccall!(nc_inq_unlimdim(ncid, &mut dim_id))?;
        Ok(if dim_id < 0 { BTreeSet::new() } else { std::iter::once(dim_id).collect() })
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "have-nc4")] {
        fn unlimited_dim_ids_enhanced(ncid: c_int) -> Result<BTreeSet<c_int>> {
            use ncdf_sys::nc_inq_unlimdims;

            let mut count: c_int = 0;
            nccall!(nc_inq_unlimdims(ncid, &mut count, std::ptr::null_mut()))?;
            let mut ids: Vec<c_int> = vec![-1; count.max(0) as usize];
            if !ids.is_empty() {
                nccall!(nc_inq_unlimdims(ncid, std::ptr::null_mut(), ids.as_mut_ptr()))?;
            }
            Ok(ids.into_iter().collect())
        }
    } else {
        fn unlimited_dim_ids_enhanced(_ncid: c_int) -> Result<BTreeSet<c_int>> {
            nc_fail!(ncdf_sys::NC_ENOTNC4)
        }
    }
}

/// Dataset builder allowing to customize how a dataset is opened or created.
#[derive(Clone, Debug)]
pub struct DatasetBuilder {
    clobber: bool,
    share: bool,
    format: Format,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self { clobber: true, share: false, format: Format::default() }
    }
}

impl DatasetBuilder {
    /// Creates a new builder: clobbering on, sharing off, classic format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether creating a dataset replaces an existing file (ignored unless creating).
    pub fn clobber(&mut self, clobber: bool) -> &mut Self {
        self.clobber = clobber;
        self
    }

    /// Requests unbuffered, shared access (only honoured by the netCDF-3 formats).
    pub fn share(&mut self, share: bool) -> &mut Self {
        self.share = share;
        self
    }

    /// Sets the file format used when creating a dataset.
    pub fn format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    /// Returns the flags that would be passed to the library for the given mode.
    pub fn flags(&self, mode: OpenMode) -> OpenFlags {
        open_flags(mode, self.clobber, self.share, self.format)
    }

    /// Opens a dataset as read-only, file must exist.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        self.open_as(path, OpenMode::Read)
    }

    /// Opens a dataset for reading and writing, file must exist.
    pub fn open_rw<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        self.open_as(path, OpenMode::Update)
    }

    /// Creates a dataset.
    pub fn create<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        self.open_as(path, OpenMode::Write)
    }

    /// Opens or creates a dataset in a given mode.
    pub fn open_as<P: AsRef<Path>>(&self, path: P, mode: OpenMode) -> Result<Dataset> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        let flags = self.flags(mode);
        let mut id: c_int = -1;
        if mode.is_create() {
            nccall!(nc_create(c_path.as_ptr(), flags.bits(), &mut id))?;
        } else {
            nccall!(nc_open(c_path.as_ptr(), flags.bits(), &mut id))?;
        }
        tracing::debug!(ncid = id, path = %path.display(), %mode, flags = flags.bits(), "opened dataset");

        let mut dataset = Dataset {
            handle: Handle::new(id),
            path: path.to_path_buf(),
            access: mode,
            format: self.format,
            mode: if mode.is_create() { DefineMode::Define } else { DefineMode::Data },
            dimensions: BTreeMap::new(),
        };
        if !mode.is_create() {
            let mut format: c_int = 0;
            nccall!(nc_inq_format(id, &mut format))?;
            if let Some(format) = Format::from_native(format) {
                dataset.format = format;
            }
            dataset.load_dimensions()?;
        }
        Ok(dataset)
    }
}
