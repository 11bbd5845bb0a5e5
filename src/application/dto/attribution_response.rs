use crate::bom_processing::domain::Package;
use crate::bom_processing::services::ResolverWarning;

/// AttributionResponse - result of the attribution generation use case
#[derive(Debug, Clone)]
pub struct AttributionResponse {
    /// Packages included in the document, in report order
    pub packages: Vec<Package>,
    /// URL resolution warnings raised during extraction
    pub warnings: Vec<ResolverWarning>,
    /// The rendered document
    pub content: String,
}

impl AttributionResponse {
    pub fn new(packages: Vec<Package>, warnings: Vec<ResolverWarning>, content: String) -> Self {
        Self {
            packages,
            warnings,
            content,
        }
    }
}
