//! Routers for both applications. Each app is its pages plus the common routes, with
//! request tracing and a body size limit.

mod common;
mod products;
mod students;

pub use common::common_routes;
pub use products::product_routes;
pub use students::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Form posts are a handful of short fields.
const BODY_LIMIT: usize = 64 * 1024;

fn with_layers(router: Router) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}

pub fn student_app(state: AppState) -> Router {
    with_layers(
        Router::new()
            .merge(common_routes(state.clone()))
            .merge(student_routes(state)),
    )
}

pub fn product_app(state: AppState) -> Router {
    with_layers(
        Router::new()
            .merge(common_routes(state.clone()))
            .merge(product_routes(state)),
    )
}
