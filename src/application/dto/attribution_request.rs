use crate::shared::{MdbomError, Result};
use std::path::PathBuf;

/// AttributionRequest - request DTO for the attribution generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionRequest {
    /// BOM file, or directory of `.json` BOM files
    pub bom_path: PathBuf,
    /// Purl type to keep (e.g. "pypi"); empty keeps every package
    pub package_type: String,
    /// Template file; `None` selects the renderer's built-in template
    pub template_path: Option<PathBuf>,
}

impl AttributionRequest {
    pub fn builder() -> AttributionRequestBuilder {
        AttributionRequestBuilder::default()
    }
}

/// Builder for [`AttributionRequest`]
#[derive(Debug, Default)]
pub struct AttributionRequestBuilder {
    bom_path: Option<PathBuf>,
    package_type: Option<String>,
    template_path: Option<PathBuf>,
}

impl AttributionRequestBuilder {
    pub fn bom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bom_path = Some(path.into());
        self
    }

    pub fn package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// `MdbomError::InvalidInput` if no BOM path was given, or if a template
    /// path was given but is empty
    pub fn build(self) -> Result<AttributionRequest> {
        let bom_path = self
            .bom_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| MdbomError::invalid_input("No file provided"))?;

        if let Some(template) = &self.template_path {
            if template.as_os_str().is_empty() {
                return Err(MdbomError::invalid_input("No valid template provided.").into());
            }
        }

        Ok(AttributionRequest {
            bom_path,
            package_type: self.package_type.unwrap_or_default(),
            template_path: self.template_path,
        })
    }
}
