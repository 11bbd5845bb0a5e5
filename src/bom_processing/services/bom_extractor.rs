use crate::bom_processing::domain::{BomComponent, BomDocument, Package};
use crate::bom_processing::policies::LicenseResolution;
use crate::bom_processing::services::purl_resolver::{PurlResolver, ResolverWarning};
use crate::ports::outbound::{BomFile, BomSource};
use crate::shared::{MdbomError, Result};
use std::path::Path;

/// Packages extracted from one or more BOM documents, in source order,
/// together with the URL resolution warnings raised on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub packages: Vec<Package>,
    pub warnings: Vec<ResolverWarning>,
}

impl Extraction {
    /// Appends `other` after the packages already collected
    pub fn append(&mut self, other: Extraction) {
        self.packages.extend(other.packages);
        self.warnings.extend(other.warnings);
    }
}

/// BomExtractor - turns BOM documents into [`Package`] records
///
/// Extraction is strict: an empty path, a missing path or a document without
/// the required structure fails with a typed [`MdbomError`]. URL resolution
/// inside it is best-effort and only produces warnings.
pub struct BomExtractor<S> {
    source: S,
}

impl<S: BomSource> BomExtractor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the raw BOM documents at `path` without parsing them
    ///
    /// # Errors
    /// - `MdbomError::InvalidInput` if `path` is empty
    /// - `MdbomError::NotFound` if `path` does not exist
    pub fn load_documents(&self, path: &Path) -> Result<Vec<BomFile>> {
        if path.as_os_str().is_empty() {
            return Err(MdbomError::invalid_input("No file provided").into());
        }
        self.source.read_boms(path)
    }

    /// Extracts packages and resolution warnings from the BOM file or directory at `path`
    pub fn extract(&self, path: &Path) -> Result<Extraction> {
        self.extract_with(path, |_, _, _| {})
    }

    /// Same as [`extract`](Self::extract), calling `on_document(position, total, document)`
    /// before each document is parsed; `position` starts at 1
    pub fn extract_with<F>(&self, path: &Path, mut on_document: F) -> Result<Extraction>
    where
        F: FnMut(usize, usize, &BomFile),
    {
        let documents = self.load_documents(path)?;
        let total = documents.len();

        let mut extraction = Extraction::default();
        for (index, document) in documents.iter().enumerate() {
            on_document(index + 1, total, document);
            extraction.append(parse_bom_document(document)?);
        }
        Ok(extraction)
    }

    /// Returns the packages of the BOM file or directory at `path`
    ///
    /// One package per component, in source order; documents of a directory
    /// are concatenated in file-name order.
    pub fn get_packages_from_bom(&self, path: &Path) -> Result<Vec<Package>> {
        Ok(self.extract(path)?.packages)
    }
}

/// Parses a single BOM document
///
/// # Errors
/// `MdbomError::MalformedBom` if the content is not JSON, has no `components`
/// array, or a component lacks a string `name`, `version` or `type`.
fn parse_bom_document(document: &BomFile) -> Result<Extraction> {
    let bom: BomDocument =
        serde_json::from_str(&document.content).map_err(|e| MdbomError::MalformedBom {
            path: document.path.clone(),
            details: e.to_string(),
        })?;

    let mut extraction = Extraction::default();
    for component in bom.components {
        let (package, warning) = component_to_package(component);
        extraction.packages.push(package);
        extraction.warnings.extend(warning);
    }
    Ok(extraction)
}

fn component_to_package(component: BomComponent) -> (Package, Option<ResolverWarning>) {
    let licenses = LicenseResolution::resolve(component.licenses.as_deref());
    let purl = component.purl.unwrap_or_default();
    let resolution = PurlResolver::resolve_url(&purl);

    // components without a purl are common and not worth a warning
    let warning = resolution.warning.filter(|_| !purl.is_empty());

    let package = Package::new(
        component.name,
        component.version,
        component.kind,
        licenses,
        purl,
        String::new(),
    )
    .with_url(resolution.url);

    (package, warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory BomSource: a path maps to its documents
    struct MockBomSource {
        entries: HashMap<PathBuf, Vec<BomFile>>,
    }

    impl MockBomSource {
        fn new() -> Self {
            Self {
                entries: HashMap::new(),
            }
        }

        fn with_file(mut self, path: &str, content: &str) -> Self {
            self.entries.insert(
                PathBuf::from(path),
                vec![BomFile::new(PathBuf::from(path), content.to_string())],
            );
            self
        }

        fn with_directory(mut self, path: &str, files: &[(&str, &str)]) -> Self {
            let documents = files
                .iter()
                .map(|(name, content)| {
                    BomFile::new(PathBuf::from(path).join(name), content.to_string())
                })
                .collect();
            self.entries.insert(PathBuf::from(path), documents);
            self
        }
    }

    impl BomSource for MockBomSource {
        fn read_boms(&self, path: &Path) -> Result<Vec<BomFile>> {
            self.entries.get(path).cloned().ok_or_else(|| {
                MdbomError::NotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
        }
    }

    const PYPI_BOM: &str = r#"{
        "components": [
            {
                "type": "library",
                "name": "argcomplete",
                "version": "1.12.2",
                "purl": "pkg:pypi/argcomplete@1.12.2",
                "licenses": [{"license": {"name": "Apache Software License"}}]
            },
            {
                "type": "library",
                "name": "certifi",
                "version": "2021.5.30",
                "purl": "pkg:pypi/certifi@2021.5.30",
                "licenses": [{"license": {"id": "MPL-2.0"}}]
            }
        ]
    }"#;

    const NPM_BOM: &str = r#"{
        "components": [
            {
                "type": "library",
                "name": "eslint",
                "version": "7.27.0",
                "purl": "pkg:npm/eslint@7.27.0",
                "licenses": [{"license": {"id": "MIT"}}]
            }
        ]
    }"#;

    fn error_kind(err: &anyhow::Error) -> &MdbomError {
        err.downcast_ref::<MdbomError>()
            .expect("error should be an MdbomError")
    }

    #[test]
    fn test_get_packages_from_pypi_bom() {
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", PYPI_BOM));
        let packages = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name(), "argcomplete");
        assert_eq!(packages[0].version(), "1.12.2");
        assert_eq!(packages[0].kind(), "library");
        assert_eq!(packages[0].licenses(), "Apache Software License");
        assert_eq!(packages[0].purl(), "pkg:pypi/argcomplete@1.12.2");
        assert_eq!(
            packages[0].url(),
            "https://pypi.org/project/argcomplete/1.12.2"
        );
        assert_eq!(packages[1].name(), "certifi");
        assert_eq!(packages[1].licenses(), "MPL-2.0");
    }

    #[test]
    fn test_get_packages_from_npm_bom() {
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", NPM_BOM));
        let packages = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap();

        assert_eq!(packages[0].licenses(), "MIT");
        assert_eq!(
            packages[0].url(),
            "https://www.npmjs.com/package/eslint/v/7.27.0"
        );
    }

    #[test]
    fn test_directory_documents_are_concatenated_in_order() {
        let source =
            MockBomSource::new().with_directory("boms", &[("a.json", NPM_BOM), ("b.json", PYPI_BOM)]);
        let extractor = BomExtractor::new(source);
        let packages = extractor.get_packages_from_bom(Path::new("boms")).unwrap();

        let names: Vec<&str> = packages.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["eslint", "argcomplete", "certifi"]);
    }

    #[test]
    fn test_extract_with_visits_documents_in_order() {
        let source =
            MockBomSource::new().with_directory("boms", &[("a.json", NPM_BOM), ("b.json", PYPI_BOM)]);
        let extractor = BomExtractor::new(source);

        let mut visited = Vec::new();
        let extraction = extractor
            .extract_with(Path::new("boms"), |position, total, document| {
                visited.push((position, total, document.path.clone()));
            })
            .unwrap();

        assert_eq!(
            visited,
            vec![
                (1, 2, PathBuf::from("boms/a.json")),
                (2, 2, PathBuf::from("boms/b.json")),
            ]
        );
        assert_eq!(extraction, extractor.extract(Path::new("boms")).unwrap());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", PYPI_BOM));
        let first = extractor.extract(Path::new("bom.json")).unwrap();
        let second = extractor.extract(Path::new("bom.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_path_is_invalid_input() {
        let extractor = BomExtractor::new(MockBomSource::new());
        let err = extractor.get_packages_from_bom(Path::new("")).unwrap_err();
        assert!(matches!(error_kind(&err), MdbomError::InvalidInput { .. }));
        assert!(err.to_string().contains("No file provided"));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let extractor = BomExtractor::new(MockBomSource::new());
        let err = extractor
            .get_packages_from_bom(Path::new("missing.json"))
            .unwrap_err();
        assert!(matches!(error_kind(&err), MdbomError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed_bom() {
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", "{not json"));
        let err = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap_err();
        assert!(matches!(error_kind(&err), MdbomError::MalformedBom { .. }));
    }

    #[test]
    fn test_missing_components_is_malformed_bom() {
        let extractor =
            BomExtractor::new(MockBomSource::new().with_file("bom.json", r#"{"bomFormat": "CycloneDX"}"#));
        let err = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap_err();
        match error_kind(&err) {
            MdbomError::MalformedBom { path, details } => {
                assert_eq!(path, &PathBuf::from("bom.json"));
                assert!(details.contains("components"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_component_without_type_is_malformed_bom() {
        let content = r#"{"components": [{"name": "Test", "version": "0.1.1"}]}"#;
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", content));
        let err = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap_err();
        assert!(matches!(error_kind(&err), MdbomError::MalformedBom { .. }));
    }

    #[test]
    fn test_license_without_id_or_name_is_unknown() {
        let content = r#"{"components": [{
            "name": "Test", "version": "0.1.1", "type": "test",
            "licenses": [{"license": {"description": "test"}}]
        }]}"#;
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", content));
        let packages = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap();

        assert_eq!(packages[0].name(), "Test");
        assert_eq!(packages[0].licenses(), "unknown");
        assert_eq!(packages[0].kind(), "test");
        assert_eq!(packages[0].version(), "0.1.1");
        assert_eq!(packages[0].url(), "");
    }

    #[test]
    fn test_missing_licenses_is_unknown() {
        let content = r#"{"components": [{"name": "Test", "version": "0.1.1", "type": "test"}]}"#;
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", content));
        let packages = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap();

        assert_eq!(packages[0].licenses(), "unknown");
        assert_eq!(packages[0].purl(), "");
        assert_eq!(packages[0].url(), "");
    }

    #[test]
    fn test_empty_components_yields_no_packages() {
        let extractor =
            BomExtractor::new(MockBomSource::new().with_file("bom.json", r#"{"components": []}"#));
        let packages = extractor
            .get_packages_from_bom(Path::new("bom.json"))
            .unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_unsupported_purl_collects_warning() {
        let content = r#"{"components": [{
            "name": "cloud.google.com/go", "version": "v0.93.3", "type": "library",
            "purl": "pkg:golang/cloud.google.com/go@v0.93.3?type=module"
        }]}"#;
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", content));
        let extraction = extractor.extract(Path::new("bom.json")).unwrap();

        assert_eq!(extraction.packages[0].url(), "");
        assert_eq!(
            extraction.warnings,
            vec![ResolverWarning::UnsupportedType {
                purl_type: "golang".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_purl_raises_no_warning() {
        let content = r#"{"components": [{"name": "Test", "version": "0.1.1", "type": "test"}]}"#;
        let extractor = BomExtractor::new(MockBomSource::new().with_file("bom.json", content));
        let extraction = extractor.extract(Path::new("bom.json")).unwrap();
        assert!(extraction.warnings.is_empty());
    }
}
