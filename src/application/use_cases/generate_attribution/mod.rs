use crate::application::dto::{AttributionRequest, AttributionResponse};
use crate::application::read_models::AttributionReadModel;
use crate::bom_processing::domain::{Package, ReportMetadata};
use crate::bom_processing::services::{BomExtractor, Extraction, PackageTypeFilter};
use crate::ports::outbound::{BomSource, ProgressReporter, TemplateRenderer, TemplateSource};
use crate::shared::{MdbomError, Result};
use std::path::{Path, PathBuf};

/// Label used in error messages when the built-in template fails to render
const BUILTIN_TEMPLATE_LABEL: &str = "<built-in template>";

/// GenerateAttributionUseCase - turns BOM files into a rendered attribution document
///
/// Orchestrates extraction, type filtering and template rendering using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `BS` - BomSource implementation
/// * `TS` - TemplateSource implementation
/// * `TR` - TemplateRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAttributionUseCase<BS, TS, TR, PR> {
    extractor: BomExtractor<BS>,
    template_source: TS,
    renderer: TR,
    progress_reporter: PR,
}

impl<BS, TS, TR, PR> GenerateAttributionUseCase<BS, TS, TR, PR>
where
    BS: BomSource,
    TS: TemplateSource,
    TR: TemplateRenderer,
    PR: ProgressReporter,
{
    /// Creates a new GenerateAttributionUseCase with injected dependencies
    pub fn new(bom_source: BS, template_source: TS, renderer: TR, progress_reporter: PR) -> Self {
        Self {
            extractor: BomExtractor::new(bom_source),
            template_source,
            renderer,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// - `InvalidInput` for an empty BOM path or an invalid package type filter
    /// - `NotFound` / `MalformedBom` from extraction
    /// - `FileReadError` / `TemplateError` from template loading and rendering
    pub fn execute(&self, request: AttributionRequest) -> Result<AttributionResponse> {
        let filter = PackageTypeFilter::new(request.package_type.as_str())?;

        // Step 1: Extract packages from every BOM document
        let extraction = self.extract_packages(&request.bom_path)?;

        for warning in &extraction.warnings {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: {}", warning));
        }

        // Step 2: Apply the package type filter
        let packages = self.apply_filter(&filter, extraction.packages);

        // Step 3: Render
        let (template, template_label) = self.load_template(request.template_path.as_deref())?;

        self.progress_reporter
            .report("📝 Rendering attribution document...");

        let model = AttributionReadModel::new(packages, ReportMetadata::current());
        let content =
            self.renderer
                .render(&template, &model)
                .map_err(|e| MdbomError::TemplateError {
                    path: template_label,
                    details: format!("{:#}", e),
                })?;

        self.progress_reporter.report_completion(&format!(
            "✨ Rendered attribution document with {} package(s)",
            model.packages.len()
        ));

        Ok(AttributionResponse::new(
            model.packages,
            extraction.warnings,
            content,
        ))
    }

    fn extract_packages(&self, bom_path: &Path) -> Result<Extraction> {
        self.progress_reporter
            .report(&format!("📖 Loading BOM from: {}", bom_path.display()));

        let mut total = 0;
        let extraction = self
            .extractor
            .extract_with(bom_path, |position, count, document| {
                total = count;
                let label = document
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| document.path.display().to_string());
                self.progress_reporter
                    .report_progress(position, count, Some(&label));
            })?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) in {} BOM file(s)",
            extraction.packages.len(),
            total
        ));

        Ok(extraction)
    }

    fn apply_filter(&self, filter: &PackageTypeFilter, packages: Vec<Package>) -> Vec<Package> {
        if filter.is_noop() {
            return packages;
        }

        let original_count = packages.len();
        let filtered = filter.filter_packages(packages);

        self.progress_reporter.report(&format!(
            "🔎 Kept {} of {} package(s) of type '{}'",
            filtered.len(),
            original_count,
            filter.package_type()
        ));

        if filtered.is_empty() && original_count > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: No package has type '{}'. The document will list no packages.",
                filter.package_type()
            ));
        }

        filtered
    }

    fn load_template(&self, template_path: Option<&Path>) -> Result<(String, PathBuf)> {
        match template_path {
            Some(path) => {
                self.progress_reporter
                    .report(&format!("📄 Using template: {}", path.display()));
                let template = self.template_source.read_template(path)?;
                Ok((template, path.to_path_buf()))
            }
            None => Ok((
                self.renderer.default_template().to_string(),
                PathBuf::from(BUILTIN_TEMPLATE_LABEL),
            )),
        }
    }
}
