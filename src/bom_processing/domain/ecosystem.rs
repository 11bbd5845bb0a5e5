use std::fmt;

/// Package ecosystems whose registry pages can be linked from a purl
///
/// This is the complete list of supported ecosystems. Supporting another one
/// means adding a variant here together with its URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    PyPi,
    Npm,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 2] = [Ecosystem::PyPi, Ecosystem::Npm];

    /// Looks up the ecosystem for a purl type tag (e.g. "pypi")
    pub fn from_purl_type(purl_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ecosystem| ecosystem.purl_type() == purl_type)
    }

    /// The purl type tag of this ecosystem
    pub fn purl_type(self) -> &'static str {
        match self {
            Ecosystem::PyPi => "pypi",
            Ecosystem::Npm => "npm",
        }
    }

    /// Builds the registry page URL for a package version
    pub fn package_url(self, package: &str, version: &str) -> String {
        match self {
            Ecosystem::PyPi => format!("https://pypi.org/project/{}/{}", package, version),
            Ecosystem::Npm => format!("https://www.npmjs.com/package/{}/v/{}", package, version),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.purl_type())
    }
}
