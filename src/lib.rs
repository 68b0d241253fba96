//! Student registry and product catalog: form-driven CRUD services on axum and sqlx.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::{product_app, student_app};
pub use service::{ProductService, StudentService};
pub use state::AppState;
pub use store::Db;
