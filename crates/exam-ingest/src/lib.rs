//! Loading of exam dataset files.
//!
//! The loader is the only part of the workspace that touches storage. It
//! turns a file into an ordered list of untyped entries, or fails with a
//! fatal [`IngestError`] when the file cannot be read as a list.

pub mod discovery;
pub mod error;
pub mod loader;

pub use discovery::{DatasetFile, discover_dataset_files};
pub use error::{IngestError, Result};
pub use loader::{DatasetFormat, LoadedDataset, load_dataset, parse_dataset};
