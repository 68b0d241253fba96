//! Shared application state for all routes.

use crate::config::AppConfig;
use crate::extractors::signing_key;
use crate::store::Db;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    /// Signs the flash cookie.
    pub flash_key: Key,
}

impl AppState {
    pub fn new(db: Db, config: &AppConfig) -> Self {
        AppState {
            db,
            flash_key: signing_key(&config.secret_key),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.flash_key.clone()
    }
}
