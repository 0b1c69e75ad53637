//! Application state shared across request handlers.

use crate::aggregation::UserService;

/// Read-only state handed to every handler.
pub(crate) struct AppState {
    /// Store lookups and product-service aggregation.
    pub(crate) service: UserService,
}
