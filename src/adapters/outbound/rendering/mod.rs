/// Template engine adapters
mod handlebars_renderer;

pub use handlebars_renderer::{HandlebarsRenderer, DEFAULT_TEMPLATE};
