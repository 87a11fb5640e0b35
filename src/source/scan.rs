use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// A handle to one listed image file.
///
/// Created once at scan time and never mutated; the scan filter guarantees
/// the file name carries a `.jpg` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// List the image files of `directory`, in a stable order.
///
/// The scan covers the directory itself (no recursion), keeps only regular
/// files whose name ends in `.jpg` case-insensitively, and skips entries it
/// cannot read. The result is sorted by path and captured once: the list is
/// fixed for the lifetime of the process.
///
/// Returns [`Error::EmptyDirectory`] when nothing matches.
pub fn list_images(directory: &Path) -> Result<Vec<ImageFile>, Error> {
    let mut files: Vec<ImageFile> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_jpg(path))
        .map(ImageFile::new)
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));

    if files.is_empty() {
        return Err(Error::EmptyDirectory {
            path: directory.to_path_buf(),
        });
    }

    Ok(files)
}

/// Only files named `*.jpg` are browsed, matched case-insensitively.
fn is_jpg(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(".jpg"))
}
