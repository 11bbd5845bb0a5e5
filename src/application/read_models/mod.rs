//! Read models: view-oriented data handed to output adapters.

mod attribution_read_model;

pub use attribution_read_model::AttributionReadModel;
