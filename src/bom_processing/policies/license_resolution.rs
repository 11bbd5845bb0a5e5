use crate::bom_processing::domain::LicenseChoice;

/// Placeholder used whenever a license cannot be determined
pub const UNKNOWN_LICENSE: &str = "unknown";

/// LicenseResolution policy for turning a component's `licenses` array into
/// the single string shown in the report
///
/// Per entry, the first available of:
/// 1. `license.id` (SPDX identifier)
/// 2. `license.name`
///
/// Blank values count as absent.
/// 3. [`UNKNOWN_LICENSE`]
///
/// Entries are joined with commas. The result is never empty.
pub struct LicenseResolution;

impl LicenseResolution {
    /// Resolves the license string of a component
    ///
    /// # Arguments
    /// * `licenses` - The component's `licenses` array, `None` when absent or null
    pub fn resolve(licenses: Option<&[LicenseChoice]>) -> String {
        let resolved: Vec<&str> = licenses
            .unwrap_or_default()
            .iter()
            .map(Self::resolve_entry)
            .collect();

        if resolved.is_empty() {
            return UNKNOWN_LICENSE.to_string();
        }
        resolved.join(",")
    }

    fn resolve_entry(choice: &LicenseChoice) -> &str {
        choice
            .license
            .as_ref()
            .and_then(|license| non_blank(&license.id).or_else(|| non_blank(&license.name)))
            .unwrap_or(UNKNOWN_LICENSE)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
