//! Page envelopes. Listing pages and form views are served as JSON view models, with any
//! flash messages taken for this page view in `meta.flashes`.

use crate::extractors::FlashMessage;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
    pub meta: Meta,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct Meta {
    pub flashes: Vec<FlashMessage>,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
    pub flashes: Vec<FlashMessage>,
    /// Backend name, shown on the product catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<&'static str>,
    /// Connection string with credentials redacted, shown next to `backend`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// Form to render: where it posts, which fields it has, and the values to pre-fill.
#[derive(Serialize)]
pub struct FormView<T> {
    pub action: String,
    pub fields: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<T>,
}

pub fn success_one<T: Serialize>(data: T, flashes: Vec<FlashMessage>) -> Json<SuccessOne<T>> {
    Json(SuccessOne {
        data,
        meta: Meta { flashes },
    })
}

pub fn success_many<T: Serialize>(data: Vec<T>, flashes: Vec<FlashMessage>) -> Json<SuccessMany<T>> {
    let count = data.len() as u64;
    Json(SuccessMany {
        data,
        meta: MetaCount {
            count,
            flashes,
            backend: None,
            database: None,
        },
    })
}
