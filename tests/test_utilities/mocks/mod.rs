/// Mock implementations for testing
mod mock_bom_source;
mod mock_progress_reporter;
mod mock_template_source;

pub use mock_bom_source::MockBomSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_template_source::MockTemplateSource;
