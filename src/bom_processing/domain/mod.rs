pub mod bom_document;
pub mod ecosystem;
pub mod package;
pub mod report_metadata;

pub use bom_document::{BomComponent, BomDocument, LicenseChoice, LicenseEntry};
pub use ecosystem::Ecosystem;
pub use package::Package;
pub use report_metadata::ReportMetadata;
