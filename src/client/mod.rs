//! Downstream collaborator client.
//!
//! This module provides the client used to reach the product service,
//! along with the error type that describes why a call failed.

pub mod http;

pub use http::{CollaboratorConfig, HttpCollaboratorClient};

use async_trait::async_trait;
use serde_json::Value;

/// Reasons a collaborator call can fail.
///
/// The `Display` text is what ends up in diagnostic response fields.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    /// The logical service name has no registered address.
    #[error("No instances available for {service}")]
    Discovery { service: String },

    /// Connection refused, DNS failure, timeout, or other transport error.
    #[error("I/O error on GET request for \"{url}\": {reason}")]
    Unreachable { url: String, reason: String },

    /// The collaborator answered with a non-success status.
    #[error("{status} on GET request for \"{url}\": {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("Could not extract response from \"{url}\": {reason}")]
    Decode { url: String, reason: String },
}

/// A single remote service reachable over HTTP GET.
#[async_trait]
pub trait CollaboratorClient: Send + Sync {
    /// GET `path` and decode the body as an opaque JSON document.
    async fn get_json(&self, path: &str) -> Result<Value, CollaboratorError>;

    /// GET `path` and return the body as raw text.
    async fn get_text(&self, path: &str) -> Result<String, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollaboratorError::Discovery {
            service: "product-service".to_string(),
        };
        assert_eq!(err.to_string(), "No instances available for product-service");

        let err = CollaboratorError::Status {
            url: "http://localhost:8082/products".to_string(),
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "503 on GET request for \"http://localhost:8082/products\": down"
        );
    }
}
