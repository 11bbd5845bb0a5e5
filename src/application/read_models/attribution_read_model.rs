//! Attribution read model handed to report templates
//!
//! Serializes to `{ "packages": [...], "metadata": {...} }`; templates address
//! fields by these names, e.g. `{{#each packages}}{{name}}{{/each}}`.

use crate::bom_processing::domain::{Package, ReportMetadata};
use serde::Serialize;

/// Data exposed to a report template
#[derive(Debug, Clone, Serialize)]
pub struct AttributionReadModel {
    /// Packages in report order
    pub packages: Vec<Package>,
    /// Tool name, version and generation time
    pub metadata: ReportMetadata,
}

impl AttributionReadModel {
    pub fn new(packages: Vec<Package>, metadata: ReportMetadata) -> Self {
        Self { packages, metadata }
    }
}
