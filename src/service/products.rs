//! Product catalog persistence. Writes run inside a transaction; dropping it on an error path
//! rolls the write back.

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use crate::store::{ensure_products_table, inserted_id, Db};
use sqlx::Row;

const COLUMNS: &str = "id, name, price, stock, description";

/// Rows inserted into an empty catalog at startup.
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Laptop", 999.99, 10, "High-performance laptop"),
        NewProduct::new("Mouse", 29.99, 50, "Wireless mouse"),
        NewProduct::new("Keyboard", 79.99, 30, "Mechanical keyboard"),
    ]
}

pub struct ProductService;

impl ProductService {
    /// Create the table if missing and seed it when empty. Returns how many rows were seeded.
    pub async fn init(db: &Db) -> Result<usize, AppError> {
        ensure_products_table(db).await?;
        Self::seed_if_empty(db).await
    }

    pub async fn seed_if_empty(db: &Db) -> Result<usize, AppError> {
        if Self::count(db).await? > 0 {
            return Ok(0);
        }
        let samples = sample_products();
        let sql = db.sql("INSERT INTO products (name, price, stock, description) VALUES (?, ?, ?, ?)");
        let mut tx = db.pool().begin().await?;
        for p in &samples {
            sqlx::query(&sql)
                .bind(&p.name)
                .bind(p.price)
                .bind(p.stock)
                .bind(&p.description)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::info!(count = samples.len(), "sample products added");
        Ok(samples.len())
    }

    pub async fn count(db: &Db) -> Result<i64, AppError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(db.pool())
            .await?;
        Ok(n)
    }

    /// All products in id order.
    pub async fn list(db: &Db) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(db.pool()).await?;
        Ok(rows)
    }

    pub async fn read(db: &Db, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = ?", COLUMNS);
        let sql = db.sql(&sql);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(db.pool())
            .await?;
        Ok(row)
    }

    pub async fn create(db: &Db, product: &NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (name, price, stock, description) VALUES (?, ?, ?, ?){}",
            db.dialect().returning_id()
        );
        let sql = db.sql(&sql);
        tracing::debug!(sql = %sql, "query (tx)");
        let mut tx = db.pool().begin().await?;
        let query = sqlx::query(&sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.description);
        let id = if db.dialect().returns_ids() {
            query.fetch_one(&mut *tx).await?.try_get::<i64, _>(0)?
        } else {
            inserted_id(query.execute(&mut *tx).await?)?
        };
        tx.commit().await?;
        tracing::info!(id, "product created");
        Ok(Product {
            id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            description: product.description.clone(),
        })
    }

    /// Look up and delete product `id` in one transaction. Fails with not found when absent.
    pub async fn delete(db: &Db, id: i64) -> Result<Product, AppError> {
        let select = format!("SELECT {} FROM products WHERE id = ?", COLUMNS);
        let select = db.sql(&select);
        let delete = db.sql("DELETE FROM products WHERE id = ?");
        tracing::debug!(sql = %delete, id, "query (tx)");

        let mut tx = db.pool().begin().await?;
        let product = sqlx::query_as::<_, Product>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        sqlx::query(&delete).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::info!(id, "product deleted");
        Ok(product)
    }
}
