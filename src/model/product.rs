//! Product record, the raw add form, and its coercion into a validated `NewProduct`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

/// Raw add form. `name` and `price` are required keys; the numeric fields arrive as text and
/// are coerced by [`ProductForm::parse`].
#[derive(Clone, Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub stock: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

impl ProductForm {
    /// Coerce the form into a product. A blank `stock` counts as 0.
    pub fn parse(&self) -> Result<NewProduct, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| AppError::Validation("price must be a number".into()))?;
        let stock = match self.stock.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(s) => s
                .parse()
                .map_err(|_| AppError::Validation("stock must be a whole number".into()))?,
        };
        Ok(NewProduct {
            name: name.to_string(),
            price,
            stock,
            description: self.description.clone().unwrap_or_default(),
        })
    }
}

impl NewProduct {
    pub fn new(name: &str, price: f64, stock: i64, description: &str) -> Self {
        NewProduct {
            name: name.to_string(),
            price,
            stock,
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, stock: Option<&str>, description: Option<&str>) -> ProductForm {
        ProductForm {
            name: name.into(),
            price: price.into(),
            stock: stock.map(Into::into),
            description: description.map(Into::into),
        }
    }

    #[test]
    fn coerces_numbers_and_defaults() {
        let p = form("Desk", "120.5", None, None).parse().unwrap();
        assert_eq!(p, NewProduct::new("Desk", 120.5, 0, ""));

        let p = form(" Lamp ", " 15 ", Some("7"), Some("LED")).parse().unwrap();
        assert_eq!(p, NewProduct::new("Lamp", 15.0, 7, "LED"));

        let p = form("Chair", "40", Some(""), None).parse().unwrap();
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(form("", "1", None, None).parse(), Err(AppError::Validation(_))));
        assert!(matches!(form("X", "cheap", None, None).parse(), Err(AppError::Validation(_))));
        assert!(matches!(form("X", "NaN", None, None).parse(), Err(AppError::Validation(_))));
        assert!(matches!(form("X", "inf", None, None).parse(), Err(AppError::Validation(_))));
        assert!(matches!(form("X", "1", Some("2.5"), None).parse(), Err(AppError::Validation(_))));
    }
}
