mod bom_extractor;
mod package_filter;
mod purl_resolver;

pub use bom_extractor::{BomExtractor, Extraction};
pub use package_filter::{filter_packages_by_type, PackageTypeFilter};
pub use purl_resolver::{PurlResolver, ResolverWarning, UrlResolution};
