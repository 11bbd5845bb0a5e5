use crate::bom_processing::domain::Package;
use crate::bom_processing::services::PurlResolver;
use crate::shared::{MdbomError, Result};

/// Maximum length of a package type filter
const MAX_PACKAGE_TYPE_LENGTH: usize = 64;

/// Returns the packages whose purl type equals `package_type`, preserving order
///
/// An empty `package_type` disables filtering and returns `packages` unchanged.
/// Packages without a valid purl never match a non-empty filter.
pub fn filter_packages_by_type(packages: Vec<Package>, package_type: &str) -> Vec<Package> {
    if package_type.is_empty() {
        return packages;
    }
    packages
        .into_iter()
        .filter(|pkg| PurlResolver::resolve_purl_type(pkg.purl()) == Ok(package_type))
        .collect()
}

/// PackageTypeFilter - a validated package type filter
///
/// Validation catches filters that could never match a purl type (e.g. "PyPI"),
/// which would otherwise silently produce an empty report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTypeFilter {
    package_type: String,
}

impl PackageTypeFilter {
    /// Creates a filter for `package_type`; an empty string keeps every package
    ///
    /// # Errors
    /// `MdbomError::InvalidInput` if the type is too long or is not made of
    /// lowercase ASCII letters only
    pub fn new(package_type: impl Into<String>) -> Result<Self> {
        let package_type = package_type.into();
        validate_package_type(&package_type)?;
        Ok(Self { package_type })
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    /// Whether this filter keeps every package
    pub fn is_noop(&self) -> bool {
        self.package_type.is_empty()
    }

    pub fn filter_packages(&self, packages: Vec<Package>) -> Vec<Package> {
        filter_packages_by_type(packages, &self.package_type)
    }
}

fn validate_package_type(package_type: &str) -> Result<()> {
    if package_type.len() > MAX_PACKAGE_TYPE_LENGTH {
        return Err(MdbomError::invalid_input(format!(
            "Package type filter is too long ({} chars). Maximum: {} chars",
            package_type.len(),
            MAX_PACKAGE_TYPE_LENGTH
        ))
        .into());
    }

    if !package_type.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(MdbomError::invalid_input(format!(
            "Package type filter '{}' is invalid. Only lowercase letters are allowed (e.g. 'pypi', 'npm').",
            package_type
        ))
        .into());
    }

    Ok(())
}
