use crate::bom_processing::domain::Ecosystem;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `pkg:<type>/<rest>` with a lowercase type tag
static PURL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pkg:(?P<type>[a-z]+)/(?P<rest>\S+)").expect("purl pattern is valid")
});

/// Why a purl could not be turned into a URL
///
/// Resolution is best-effort: these are diagnostics for the caller to surface,
/// never failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverWarning {
    #[error("No valid purl: {purl} provided, returning empty URL")]
    InvalidPurl { purl: String },

    #[error("Package type: {purl_type} not supported, returning empty URL")]
    UnsupportedType { purl_type: String },

    #[error("No valid {ecosystem} purl: {purl} provided, returning empty URL")]
    MalformedPurl { ecosystem: Ecosystem, purl: String },
}

/// Outcome of resolving a purl to a web URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolution {
    /// The registry URL, empty when the purl could not be resolved
    pub url: String,
    /// Set whenever `url` is empty
    pub warning: Option<ResolverWarning>,
}

impl UrlResolution {
    fn resolved(url: String) -> Self {
        Self { url, warning: None }
    }

    fn unresolved(warning: ResolverWarning) -> Self {
        Self {
            url: String::new(),
            warning: Some(warning),
        }
    }
}

/// PurlResolver - maps package URLs to human-facing registry pages
///
/// Stateless; every function is total over its input.
pub struct PurlResolver;

impl PurlResolver {
    /// Returns the type tag of `purl` (e.g. "pypi"), or the reason it has none
    pub fn resolve_purl_type(purl: &str) -> Result<&str, ResolverWarning> {
        Self::split_purl(purl).map(|(purl_type, _)| purl_type)
    }

    /// Returns the type tag of `purl`, or an empty string if it is not a valid purl
    pub fn get_purl_type(purl: &str) -> String {
        Self::resolve_purl_type(purl)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Resolves `purl` to a registry URL for the supported ecosystems
    pub fn resolve_url(purl: &str) -> UrlResolution {
        let (purl_type, rest) = match Self::split_purl(purl) {
            Ok(parts) => parts,
            Err(warning) => return UrlResolution::unresolved(warning),
        };

        let Some(ecosystem) = Ecosystem::from_purl_type(purl_type) else {
            return UrlResolution::unresolved(ResolverWarning::UnsupportedType {
                purl_type: purl_type.to_string(),
            });
        };

        match Self::split_package_and_version(rest) {
            Some((package, version)) => {
                UrlResolution::resolved(ecosystem.package_url(package, version))
            }
            None => UrlResolution::unresolved(ResolverWarning::MalformedPurl {
                ecosystem,
                purl: purl.to_string(),
            }),
        }
    }

    /// Resolves `purl` to a registry URL, or an empty string when that is not possible
    pub fn get_url(purl: &str) -> String {
        Self::resolve_url(purl).url
    }

    fn split_purl(purl: &str) -> Result<(&str, &str), ResolverWarning> {
        PURL_PATTERN
            .captures(purl)
            .and_then(|caps| Some((caps.name("type")?.as_str(), caps.name("rest")?.as_str())))
            .ok_or_else(|| ResolverWarning::InvalidPurl {
                purl: purl.to_string(),
            })
    }

    /// Splits `<package>@<version>`; both halves must be non-empty and `@` must occur once
    fn split_package_and_version(rest: &str) -> Option<(&str, &str)> {
        let mut parts = rest.split('@');
        let package = parts.next()?;
        let version = parts.next()?;
        if parts.next().is_some() || package.is_empty() || version.is_empty() {
            return None;
        }
        Some((package, version))
    }
}
