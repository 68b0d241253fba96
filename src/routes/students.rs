//! Student registry routes.

use crate::handlers::students::{add, add_form, delete, edit, edit_form, index, search};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add))
        .route("/edit/:id", get(edit_form).post(edit))
        .route("/delete/:id", get(delete))
        .route("/search", get(search))
        .with_state(state)
}
