//! mdbom - Markdown attribution documents from CycloneDX BOM files
//!
//! This library extracts the third-party packages listed in CycloneDX-style
//! BOM JSON documents, resolves their package URLs (purls) to registry web
//! pages and renders them into a Markdown document through a template,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_processing`): BOM extraction, license and URL resolution
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): The `mdbom.config.yml` file
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use mdbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateAttributionUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     HandlebarsRenderer::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AttributionRequest::builder()
//!     .bom_path("bom.json")
//!     .package_type("pypi")
//!     .build()?;
//! let response = use_case.execute(request)?;
//! print!("{}", response.content);
//! # Ok(())
//! # }
//! ```
//!
//! The extraction and resolution operations are also available as plain
//! functions:
//!
//! ```no_run
//! # fn main() -> mdbom::shared::Result<()> {
//! let packages = mdbom::get_packages_from_bom("bom.json")?;
//! let npm_only = mdbom::filter_packages_by_type(packages, "npm");
//! assert_eq!(mdbom::get_purl_type("pkg:npm/eslint@7.27.0"), "npm");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_processing;
pub mod config;
pub mod ports;
pub mod shared;

use adapters::outbound::filesystem::FileSystemReader;
use bom_processing::domain::Package;
use bom_processing::services::{BomExtractor, PurlResolver};
use std::path::Path;

pub use bom_processing::services::filter_packages_by_type;

/// Reads the BOM file, or every `.json` file of a BOM directory, into packages
///
/// URL resolution warnings are dropped; use [`BomExtractor::extract`] with a
/// [`FileSystemReader`] to receive them alongside the packages.
///
/// # Errors
/// - `MdbomError::InvalidInput` if `path` is empty
/// - `MdbomError::NotFound` if `path` does not exist
/// - `MdbomError::MalformedBom` if a document lacks the required structure
pub fn get_packages_from_bom(path: impl AsRef<Path>) -> shared::Result<Vec<Package>> {
    BomExtractor::new(FileSystemReader::new()).get_packages_from_bom(path.as_ref())
}

/// Returns the type of `purl` (e.g. "pypi"), or an empty string if it is not a valid purl
pub fn get_purl_type(purl: &str) -> String {
    PurlResolver::get_purl_type(purl)
}

/// Returns the registry web page of `purl`, or an empty string if it cannot be resolved
pub fn get_url(purl: &str) -> String {
    PurlResolver::get_url(purl)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::rendering::HandlebarsRenderer;
    pub use crate::application::dto::{AttributionRequest, AttributionResponse};
    pub use crate::application::read_models::AttributionReadModel;
    pub use crate::application::use_cases::GenerateAttributionUseCase;
    pub use crate::bom_processing::domain::{Ecosystem, Package, ReportMetadata};
    pub use crate::bom_processing::policies::LicenseResolution;
    pub use crate::bom_processing::services::{
        filter_packages_by_type, BomExtractor, PackageTypeFilter, PurlResolver, ResolverWarning,
    };
    pub use crate::ports::outbound::{
        BomFile, BomSource, OutputPresenter, ProgressReporter, TemplateRenderer, TemplateSource,
    };
    pub use crate::shared::{MdbomError, Result};
}
