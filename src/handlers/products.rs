//! Product catalog pages and form posts. Store failures here are logged, flashed and
//! served rather than turned into error responses.

use super::{back_to_form, form_rejection, parse_id};
use crate::error::AppError;
use crate::extractors::{Flash, FlashMessage};
use crate::model::{Product, ProductForm};
use crate::response::{success_many, success_one, FormView, SuccessMany, SuccessOne};
use crate::service::ProductService;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Redirect,
    Form, Json,
};

pub const PRODUCT_ADDED: &str = "Product added!";
pub const PRODUCT_DELETED: &str = "Product deleted!";
pub const FETCH_FAILED: &str = "Database error while fetching products.";
pub const ADD_FAILED: &str = "Database error while adding product.";
pub const DELETE_FAILED: &str = "Database error while deleting product.";

const FIELDS: &[&str] = &["name", "price", "stock", "description"];

/// GET / — every product, plus which backend is serving them and its redacted URL.
pub async fn index(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<(Flash, Json<SuccessMany<Product>>), AppError> {
    let (flash, mut flashes) = flash.take();
    let products = match ProductService::list(&state.db).await {
        Ok(rows) => rows,
        Err(e) if e.is_store_failure() => {
            tracing::error!(error = %e, "fetching products failed");
            flashes.push(FlashMessage::danger(FETCH_FAILED));
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    let Json(mut page) = success_many(products, flashes);
    page.meta.backend = Some(state.db.dialect().name());
    page.meta.database = Some(state.db.url().to_string());
    Ok((flash, Json(page)))
}

/// GET /add — empty form.
pub async fn add_form(flash: Flash) -> (Flash, Json<SuccessOne<FormView<Product>>>) {
    let (flash, flashes) = flash.take();
    let view = FormView {
        action: "/add".to_string(),
        fields: FIELDS,
        values: None,
    };
    (flash, success_one(view, flashes))
}

/// POST /add
pub async fn add(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<(Flash, Redirect), AppError> {
    let Form(form) = form.map_err(form_rejection)?;
    let product = match form.parse() {
        Ok(p) => p,
        Err(e) => return back_to_form(flash, e, "/add"),
    };
    match ProductService::create(&state.db, &product).await {
        Ok(_) => Ok((flash.success(PRODUCT_ADDED), Redirect::to("/"))),
        Err(e) if e.is_store_failure() => {
            tracing::error!(error = %e, "adding product failed");
            Ok((flash.danger(ADD_FAILED), Redirect::to("/add")))
        }
        Err(e) => Err(e),
    }
}

/// GET /delete/:id — 404 when the product does not exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    flash: Flash,
) -> Result<(Flash, Redirect), AppError> {
    let id = parse_id(&id_str)?;
    match ProductService::delete(&state.db, id).await {
        Ok(_) => Ok((flash.danger(PRODUCT_DELETED), Redirect::to("/"))),
        Err(e) if e.is_store_failure() => {
            tracing::error!(error = %e, id, "deleting product failed");
            Ok((flash.danger(DELETE_FAILED), Redirect::to("/")))
        }
        Err(e) => Err(e),
    }
}
