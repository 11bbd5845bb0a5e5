use crate::application::read_models::AttributionReadModel;
use crate::ports::outbound::TemplateRenderer;
use crate::shared::Result;
use anyhow::Context;
use handlebars::Handlebars;

/// Template used when no template file is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../../templates/attribution.md.hbs");

/// Escapes pipe characters and newlines for safe Markdown table rendering
fn escape_markdown_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// HandlebarsRenderer adapter rendering attribution documents with Handlebars
///
/// HTML escaping is replaced by Markdown table escaping, so a license name
/// such as `MIT | Apache-2.0` cannot break the table it is rendered into.
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(escape_markdown_table_cell);
        Self { handlebars }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, model: &AttributionReadModel) -> Result<String> {
        self.handlebars
            .render_template(template, model)
            .context("Failed to render attribution template")
    }

    fn default_template(&self) -> &str {
        DEFAULT_TEMPLATE
    }
}
