//! Row types and submitted forms for both applications.

mod product;
mod student;
pub use product::{NewProduct, Product, ProductForm};
pub use student::{Student, StudentForm};
