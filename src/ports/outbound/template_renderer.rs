use crate::application::read_models::AttributionReadModel;
use crate::shared::Result;

/// TemplateRenderer port for turning the package list into a document
///
/// The template language is chosen by the adapter; the application layer only
/// hands over the template source and the read model.
pub trait TemplateRenderer {
    /// Renders `template` with the attribution read model as its data
    ///
    /// # Arguments
    /// * `template` - The template source text
    /// * `model` - Packages and report metadata exposed to the template
    ///
    /// # Returns
    /// The rendered document
    ///
    /// # Errors
    /// Returns an error if the template cannot be compiled or rendered
    fn render(&self, template: &str, model: &AttributionReadModel) -> Result<String>;

    /// Template used when the caller does not supply one
    fn default_template(&self) -> &str;
}
