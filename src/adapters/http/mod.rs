//! HTTP adapters - REST API implementation.
//!
//! The API is assembled from a fixed route table (see [`routes`]). Each
//! area has its own handlers and DTOs; errors share one envelope.

pub mod content;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod stock;

// Re-export key types for convenience
pub use content::ContentAppState;
pub use error::{ApiError, ErrorResponse};
pub use middleware::{basic_auth_middleware, AuthState, RequireAuth};
pub use routes::{api_router, restrict_to_namespace, ApiState, RouteEntry, ROUTE_TABLE};
pub use stock::StockAppState;
