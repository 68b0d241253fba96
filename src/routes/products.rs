//! Product catalog routes: listing, add and delete. There is no edit or search.

use crate::handlers::products::{add, add_form, delete, index};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add))
        .route("/delete/:id", get(delete))
        .with_state(state)
}
