/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, template engine).
pub mod bom_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod template_renderer;
pub mod template_source;

pub use bom_source::{BomFile, BomSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use template_renderer::TemplateRenderer;
pub use template_source::TemplateSource;
