use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Raw content of one BOM document together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomFile {
    pub path: PathBuf,
    pub content: String,
}

impl BomFile {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

/// BomSource port for loading BOM documents
///
/// This port abstracts the file system operations needed to turn a
/// user-supplied path into the BOM documents to extract packages from.
pub trait BomSource {
    /// Loads the BOM documents found at `path`
    ///
    /// # Arguments
    /// * `path` - A single BOM file, or a directory holding `.json` BOM files
    ///
    /// # Returns
    /// The documents in processing order. For a directory this is every entry
    /// whose name ends in `.json`, sorted by file name.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not exist (`MdbomError::NotFound`)
    /// - A file cannot be read due to permissions or I/O errors
    fn read_boms(&self, path: &Path) -> Result<Vec<BomFile>>;
}
