//! Static service registry.
//!
//! Maps logical service names (as used in `http://product-service/...`)
//! to concrete base URLs taken from configuration.

use std::collections::HashMap;

/// Logical name the product service registers under.
pub const PRODUCT_SERVICE: &str = "product-service";

/// Resolves logical service names to base URLs.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    services: HashMap<String, String>,
}

impl ServiceRegistry {
    /// Build a registry from a name -> base URL map.
    pub fn new(services: HashMap<String, String>) -> Self {
        let services = services
            .into_iter()
            .map(|(name, url)| (name, url.trim_end_matches('/').to_string()))
            .collect();
        Self { services }
    }

    /// Register or replace a service.
    #[cfg(test)]
    pub fn register(&mut self, name: impl Into<String>, base_url: &str) {
        self.services
            .insert(name.into(), base_url.trim_end_matches('/').to_string());
    }

    /// Base URL for `name`, without a trailing slash.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.services.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered() {
        let mut services = HashMap::new();
        services.insert(
            PRODUCT_SERVICE.to_string(),
            "http://localhost:8082/".to_string(),
        );
        let registry = ServiceRegistry::new(services);

        assert_eq!(
            registry.resolve(PRODUCT_SERVICE),
            Some("http://localhost:8082")
        );
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ServiceRegistry::default();
        assert_eq!(registry.resolve(PRODUCT_SERVICE), None);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ServiceRegistry::default();
        registry.register(PRODUCT_SERVICE, "http://a:1");
        registry.register(PRODUCT_SERVICE, "http://b:2//");

        assert_eq!(registry.resolve(PRODUCT_SERVICE), Some("http://b:2"));
    }
}
