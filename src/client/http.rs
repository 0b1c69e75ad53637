//! reqwest-backed collaborator client.
//!
//! Every call resolves the configured service name through the registry,
//! issues one GET, and maps transport, status, and decode failures onto
//! [`CollaboratorError`]. There is no retry.

use super::{CollaboratorClient, CollaboratorError};
use crate::discovery::ServiceRegistry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Settings for reaching one collaborator.
#[derive(Debug, Clone)]
pub struct CollaboratorConfig {
    /// Logical name resolved through the registry.
    pub service: String,
    /// Per-request timeout. None leaves the transport default in place.
    pub timeout_seconds: Option<u64>,
}

/// Collaborator client that talks HTTP.
#[derive(Debug, Clone)]
pub struct HttpCollaboratorClient {
    config: CollaboratorConfig,
    registry: ServiceRegistry,
    http_client: reqwest::Client,
}

impl HttpCollaboratorClient {
    /// Create a client for `config.service`.
    pub fn new(config: CollaboratorConfig, registry: ServiceRegistry) -> Result<Self> {
        info!(
            "Collaborator {} at {}",
            config.service,
            registry.resolve(&config.service).unwrap_or("<unregistered>")
        );

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            registry,
            http_client,
        })
    }

    /// Full URL for `path` on the configured service.
    fn url_for(&self, path: &str) -> Result<String, CollaboratorError> {
        let base = self
            .registry
            .resolve(&self.config.service)
            .ok_or_else(|| CollaboratorError::Discovery {
                service: self.config.service.clone(),
            })?;
        Ok(format!("{}{}", base, path))
    }

    /// Issue the GET and reject non-success statuses.
    async fn send(&self, path: &str) -> Result<(String, reqwest::Response), CollaboratorError> {
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                format!(
                    "Request timed out after {}s",
                    self.config.timeout_seconds.unwrap_or_default()
                )
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            CollaboratorError::Unreachable {
                url: url.clone(),
                reason,
            }
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::Status { url, status, body });
        }

        Ok((url, response))
    }
}

#[async_trait]
impl CollaboratorClient for HttpCollaboratorClient {
    async fn get_json(&self, path: &str) -> Result<Value, CollaboratorError> {
        let (url, response) = self.send(path).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| CollaboratorError::Decode {
                url,
                reason: e.to_string(),
            })
    }

    async fn get_text(&self, path: &str) -> Result<String, CollaboratorError> {
        let (url, response) = self.send(path).await?;
        response.text().await.map_err(|e| CollaboratorError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}
