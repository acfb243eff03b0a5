pub mod dataset;
pub mod dimension;
pub mod format;

pub use self::{
    dataset::{Dataset, DatasetBuilder, DefineMode},
    dimension::Dimension,
    format::{Format, OpenFlags, OpenMode},
};
