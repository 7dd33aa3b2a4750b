//! Route table and router assembly.
//!
//! The API surface is a fixed table. The router is built from the table
//! after restricting it to the `custom/v1` namespace; every request that
//! falls outside it, by path or by method, gets the `rest_no_route` 404.
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | GET | `/api/custom/v1/posts/` | none |
//! | GET | `/api/custom/v1/posts/:id` | none |
//! | GET | `/api/custom/v1/products/` | none |
//! | GET | `/api/custom/v1/products/:id` | none |
//! | POST | `/api/custom/v1/stock` | Basic |
//!
//! Collection routes also answer without the trailing slash.

use axum::extract::FromRef;
use axum::middleware;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;

use super::content::{get_post, get_product, list_posts, list_products, ContentAppState};
use super::error::no_route;
use super::middleware::{basic_auth_middleware, AuthState};
use super::stock::{update_stock, StockAppState};

/// URL prefix in front of every namespace.
pub const API_PREFIX: &str = "/api";

/// The only namespace this service exposes.
pub const NAMESPACE: &str = "custom/v1";

/// HTTP method of a route table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    fn filter(self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
        }
    }
}

/// What a route does once matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListPosts,
    GetPost,
    ListProducts,
    GetProduct,
    UpdateStock,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub namespace: &'static str,
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

impl RouteEntry {
    const fn custom(method: RouteMethod, path: &'static str, endpoint: Endpoint) -> Self {
        Self {
            namespace: NAMESPACE,
            method,
            path,
            endpoint,
        }
    }

    /// Full request path, e.g. `/api/custom/v1/posts/`.
    pub fn full_path(&self) -> String {
        format!("{}/{}{}", API_PREFIX, self.namespace, self.path)
    }

    /// Whether the endpoint requires Basic-Auth.
    pub fn requires_auth(&self) -> bool {
        matches!(self.endpoint, Endpoint::UpdateStock)
    }
}

/// Every route the service declares.
pub const ROUTE_TABLE: [RouteEntry; 5] = [
    RouteEntry::custom(RouteMethod::Get, "/posts/", Endpoint::ListPosts),
    RouteEntry::custom(RouteMethod::Get, "/posts/:id", Endpoint::GetPost),
    RouteEntry::custom(RouteMethod::Get, "/products/", Endpoint::ListProducts),
    RouteEntry::custom(RouteMethod::Get, "/products/:id", Endpoint::GetProduct),
    RouteEntry::custom(RouteMethod::Post, "/stock", Endpoint::UpdateStock),
];

/// Keeps only the routes that belong to `namespace`.
pub fn restrict_to_namespace(routes: &[RouteEntry], namespace: &str) -> Vec<RouteEntry> {
    routes
        .iter()
        .filter(|route| route.namespace == namespace)
        .copied()
        .collect()
}

/// Shared state for the whole API.
#[derive(Clone)]
pub struct ApiState {
    pub content: ContentAppState,
    pub stock: StockAppState,
    pub auth: AuthState,
}

impl FromRef<ApiState> for ContentAppState {
    fn from_ref(state: &ApiState) -> Self {
        state.content.clone()
    }
}

impl FromRef<ApiState> for StockAppState {
    fn from_ref(state: &ApiState) -> Self {
        state.stock.clone()
    }
}

fn endpoint_router(route: &RouteEntry, state: &ApiState) -> MethodRouter<ApiState> {
    let filter = route.method.filter();
    let method_router = match route.endpoint {
        Endpoint::ListPosts => on(filter, list_posts),
        Endpoint::GetPost => on(filter, get_post),
        Endpoint::ListProducts => on(filter, list_products),
        Endpoint::GetProduct => on(filter, get_product),
        Endpoint::UpdateStock => on(filter, update_stock),
    };

    let method_router = if route.requires_auth() {
        method_router.route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            basic_auth_middleware,
        ))
    } else {
        method_router
    };

    // Wrong method on a known path is still "no route".
    method_router.fallback(no_route)
}

/// Builds the API router from the namespace-restricted route table.
pub fn api_router(state: ApiState) -> Router {
    let mut router = Router::new();

    for route in restrict_to_namespace(&ROUTE_TABLE, NAMESPACE) {
        let path = route.full_path();
        let method_router = endpoint_router(&route, &state);

        if let Some(bare) = path.strip_suffix('/') {
            router = router.route(bare, method_router.clone());
        }
        router = router.route(&path, method_router);
    }

    router.fallback(no_route).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_has_exactly_five_custom_routes() {
        assert_eq!(ROUTE_TABLE.len(), 5);
        assert!(ROUTE_TABLE.iter().all(|r| r.namespace == "custom/v1"));
    }

    #[test]
    fn route_table_paths() {
        let paths: Vec<(RouteMethod, String)> = ROUTE_TABLE
            .iter()
            .map(|r| (r.method, r.full_path()))
            .collect();

        assert_eq!(
            paths,
            vec![
                (RouteMethod::Get, "/api/custom/v1/posts/".to_string()),
                (RouteMethod::Get, "/api/custom/v1/posts/:id".to_string()),
                (RouteMethod::Get, "/api/custom/v1/products/".to_string()),
                (RouteMethod::Get, "/api/custom/v1/products/:id".to_string()),
                (RouteMethod::Post, "/api/custom/v1/stock".to_string()),
            ]
        );
    }

    #[test]
    fn only_stock_requires_auth() {
        let protected: Vec<Endpoint> = ROUTE_TABLE
            .iter()
            .filter(|r| r.requires_auth())
            .map(|r| r.endpoint)
            .collect();
        assert_eq!(protected, vec![Endpoint::UpdateStock]);
    }

    #[test]
    fn restriction_drops_platform_defaults() {
        let mut routes = ROUTE_TABLE.to_vec();
        routes.push(RouteEntry {
            namespace: "wp/v2",
            method: RouteMethod::Get,
            path: "/users",
            endpoint: Endpoint::ListPosts,
        });
        routes.push(RouteEntry {
            namespace: "oembed/1.0",
            method: RouteMethod::Get,
            path: "/embed",
            endpoint: Endpoint::ListPosts,
        });

        let restricted = restrict_to_namespace(&routes, NAMESPACE);

        assert_eq!(restricted, ROUTE_TABLE.to_vec());
    }

    #[test]
    fn restriction_to_unknown_namespace_is_empty() {
        assert!(restrict_to_namespace(&ROUTE_TABLE, "wp/v2").is_empty());
    }
}
