use crate::shared::Result;

/// OutputPresenter port for delivering the rendered attribution document
///
/// This port abstracts the output destination (stdout, a Markdown file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected (missing parent directory, symbolic link)
    fn present(&self, content: &str) -> Result<()>;
}
