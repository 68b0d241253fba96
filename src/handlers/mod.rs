//! HTTP handlers for the student registry and the product catalog.

pub mod products;
pub mod students;

use crate::error::AppError;
use crate::extractors::Flash;
use axum::extract::rejection::FormRejection;
use axum::response::Redirect;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// A form body that does not deserialize (usually a missing key) is a client error,
/// not something to flash.
fn form_rejection(rejection: FormRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Send the user back to `form_path` with the error flashed, for errors they can fix.
/// Anything else is returned as-is.
fn back_to_form(flash: Flash, err: AppError, form_path: &str) -> Result<(Flash, Redirect), AppError> {
    match err.user_message() {
        Some(msg) => {
            let msg = msg.to_string();
            Ok((flash.danger(msg), Redirect::to(form_path)))
        }
        None => Err(err),
    }
}
