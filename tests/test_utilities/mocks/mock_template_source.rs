use mdbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock TemplateSource serving templates from memory
#[derive(Default)]
pub struct MockTemplateSource {
    templates: HashMap<PathBuf, String>,
}

impl MockTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.templates.insert(path.into(), content.to_string());
        self
    }
}

impl TemplateSource for MockTemplateSource {
    fn read_template(&self, path: &Path) -> Result<String> {
        self.templates.get(path).cloned().ok_or_else(|| {
            MdbomError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }
}
