//! Aggregation of local user data with product-service data.
//!
//! The two composite operations differ in how they treat a collaborator
//! failure: a failed product listing is a hard failure, while a failed
//! sub-call inside a dashboard still yields a successful, partial result.
//! Collaborator errors never escape this module; they become diagnostic
//! fields in the returned [`CompositeResult`].

use crate::client::CollaboratorClient;
use crate::models::{CompositeResult, User};
use crate::store::RecordStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const PRODUCTS_PATH: &str = "/products";
const PRODUCTS_INFO_PATH: &str = "/products/info";

const PRODUCTS_MESSAGE: &str = "Products available for users";
const PRODUCTS_SOURCE: &str = "Called from User Service";
const PRODUCTS_ERROR: &str = "Cannot connect to Product Service";
const PRODUCTS_SUGGESTION: &str = "Make sure Product Service is running and registered to Eureka";

const DASHBOARD_CONNECTED: &str = "All services connected";
const DASHBOARD_PARTIAL: &str = "Partial service failure";
const DASHBOARD_UNAVAILABLE: &str = "Product Service unavailable";

/// Result of a composite operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Everything needed was obtained, or a partial result is still useful.
    Success(CompositeResult),
    /// The operation could not produce its primary content.
    Failure(CompositeResult),
    /// The local record does not exist.
    NotFound,
}

/// Orchestrates the record store and the product-service client.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore>,
    products: Arc<dyn CollaboratorClient>,
    port: u16,
}

impl UserService {
    /// Create the service. `port` is reported by [`UserService::service_info`].
    pub fn new(
        store: Arc<dyn RecordStore>,
        products: Arc<dyn CollaboratorClient>,
        port: u16,
    ) -> Self {
        Self {
            store,
            products,
            port,
        }
    }

    /// All users in store order.
    pub fn list_users(&self) -> Vec<User> {
        self.store.list_all()
    }

    /// A single user, or None when the id is unknown.
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.store.find_by_id(id)
    }

    /// Fixed status line for this service.
    pub fn service_info(&self) -> String {
        format!("User Service is running on port {}", self.port)
    }

    /// List the product catalog through the product service.
    pub async fn list_products(&self) -> Outcome {
        match self.products.get_json(PRODUCTS_PATH).await {
            Ok(products) => Outcome::Success(
                CompositeResult::new()
                    .with("message", PRODUCTS_MESSAGE)
                    .with("products", products)
                    .with("source", PRODUCTS_SOURCE),
            ),
            Err(e) => {
                warn!("Product listing failed: {}", e);
                Outcome::Failure(
                    CompositeResult::new()
                        .with("error", PRODUCTS_ERROR)
                        .with("details", e.to_string())
                        .with("suggestion", PRODUCTS_SUGGESTION),
                )
            }
        }
    }

    /// Combine a user with the product service status.
    ///
    /// An unknown id short-circuits before any remote call.
    pub async fn build_dashboard(&self, id: i64) -> Outcome {
        let Some(user) = self.store.find_by_id(id) else {
            debug!("Dashboard requested for unknown user {}", id);
            return Outcome::NotFound;
        };
        let user = user_value(&user);

        match self.products.get_text(PRODUCTS_INFO_PATH).await {
            Ok(info) => Outcome::Success(
                CompositeResult::new()
                    .with("user", user)
                    .with("productServiceStatus", info)
                    .with("status", DASHBOARD_CONNECTED),
            ),
            Err(e) => {
                warn!("Dashboard for user {} is partial: {}", id, e);
                Outcome::Success(
                    CompositeResult::new()
                        .with("user", user)
                        .with("productServiceStatus", DASHBOARD_UNAVAILABLE)
                        .with("error", e.to_string())
                        .with("status", DASHBOARD_PARTIAL),
                )
            }
        }
    }
}

fn user_value(user: &User) -> Value {
    // User is plain strings and integers; serialization cannot fail
    serde_json::to_value(user).unwrap_or(Value::Null)
}
