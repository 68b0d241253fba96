//! SQL helpers shared by the services: backend dialect, placeholder rewriting, LIKE patterns.

mod builder;
mod dialect;
pub use builder::{contains_pattern, LIKE_ESCAPE};
pub use dialect::{redact, Dialect};
