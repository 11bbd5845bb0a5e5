use crate::shared::Result;
use std::path::Path;

/// TemplateSource port for loading report templates
pub trait TemplateSource {
    /// Reads the template file at `path`
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_template(&self, path: &Path) -> Result<String>;
}
