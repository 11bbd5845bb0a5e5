use mdbom::prelude::*;
use std::path::{Path, PathBuf};

/// Mock BomSource serving in-memory documents for one path
pub struct MockBomSource {
    path: PathBuf,
    documents: Vec<BomFile>,
}

impl MockBomSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            documents: Vec::new(),
        }
    }

    /// Adds a document; an empty `name` stands for the path itself
    pub fn with_document(mut self, name: &str, content: &str) -> Self {
        let path = if name.is_empty() {
            self.path.clone()
        } else {
            self.path.join(name)
        };
        self.documents.push(BomFile::new(path, content.to_string()));
        self
    }
}

impl BomSource for MockBomSource {
    fn read_boms(&self, path: &Path) -> Result<Vec<BomFile>> {
        if path != self.path {
            return Err(MdbomError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(self.documents.clone())
    }
}
