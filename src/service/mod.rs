//! Validation and persistence for the student registry and the product catalog.

mod products;
mod students;
pub mod validation;
pub use products::{sample_products, ProductService};
pub use students::{StudentService, EMAIL_TAKEN, EMAIL_TAKEN_BY_OTHER};
pub use validation::{is_valid_mobile, RequestValidator, INVALID_MOBILE};
