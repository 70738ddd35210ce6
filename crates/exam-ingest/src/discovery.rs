//! Dataset file discovery.
//!
//! Exam collections are usually downloaded repository by repository into one
//! directory, so dataset files sit at any depth. Hidden directories (download
//! caches, VCS metadata) are never entered.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// A dataset file found under a collection directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    pub path: PathBuf,
    /// Path relative to the collection root, `/`-separated.
    pub name: String,
}

/// Every `.json` file below `root`, ordered by relative name.
pub fn discover_dataset_files(root: &Path) -> Result<Vec<DatasetFile>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for path in read_dir_paths(&dir)? {
            if is_hidden(&path) {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else if is_dataset_file(&path) {
                let name = relative_name(root, &path);
                files.push(DatasetFile { path, name });
            }
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(root = %root.display(), files = files.len(), "discovered dataset files");
    Ok(files)
}

fn read_dir_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(read_error)?
        .map(|entry| entry.map(|entry| entry.path()).map_err(read_error))
        .collect()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_dataset_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
