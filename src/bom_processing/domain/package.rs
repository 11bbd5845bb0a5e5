use serde::Serialize;

/// Package value object representing one third-party component of a BOM
///
/// Packages are never mutated in place: attaching a URL produces a new value
/// through [`Package::with_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    name: String,
    version: String,
    kind: String,
    licenses: String,
    purl: String,
    url: String,
}

impl Package {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
        licenses: impl Into<String>,
        purl: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind: kind.into(),
            licenses: licenses.into(),
            purl: purl.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Component type as declared by the BOM producer (e.g. "library")
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Comma-joined license identifiers, `"unknown"` when nothing could be resolved
    pub fn licenses(&self) -> &str {
        &self.licenses
    }

    /// Raw package URL from the BOM, empty when the component had none
    pub fn purl(&self) -> &str {
        &self.purl
    }

    /// Web URL of the package, empty when it could not be resolved
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns a copy of this package pointing at `url`
    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self
        }
    }
}
