/// Data Transfer Objects for the application layer
mod attribution_request;
mod attribution_response;

pub use attribution_request::{AttributionRequest, AttributionRequestBuilder};
pub use attribution_response::AttributionResponse;
