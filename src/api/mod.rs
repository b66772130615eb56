//! API Gateway
//!
//! Outbound HTTP to the backend: bearer auth, transport seam, error normalization.

mod client;
mod error;
mod transport;

pub use client::ApiClient;
pub use error::ApiError;
#[cfg(test)]
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
