//! Wire shape of the CycloneDX-style BOM documents that mdbom reads.
//!
//! Only the fields needed for attribution are modelled; everything else in a
//! real CycloneDX document (metadata, dependencies, hashes, ...) is ignored.

use serde::Deserialize;

/// A BOM document: a JSON object with a `components` array
#[derive(Debug, Deserialize)]
pub struct BomDocument {
    pub components: Vec<BomComponent>,
}

/// One entry of the `components` array
#[derive(Debug, Deserialize)]
pub struct BomComponent {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default)]
    pub licenses: Option<Vec<LicenseChoice>>,
}

/// An entry of a component's `licenses` array
#[derive(Debug, Deserialize)]
pub struct LicenseChoice {
    #[serde(default)]
    pub license: Option<LicenseEntry>,
}

/// The `license` object of a license choice
#[derive(Debug, Deserialize)]
pub struct LicenseEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
