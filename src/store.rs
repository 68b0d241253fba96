//! Connection pool for the configured backend and table DDL. Every table is created with
//! `IF NOT EXISTS` so startup can run against an existing database.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::sql::{redact, Dialect};
use sqlx::any::{AnyPoolOptions, AnyQueryResult};
use sqlx::AnyPool;
use std::borrow::Cow;
use std::time::Duration;

/// Pool plus the dialect its statements must be written in.
#[derive(Clone, Debug)]
pub struct Db {
    pool: AnyPool,
    dialect: Dialect,
    url: String,
}

impl Db {
    /// Connect using `config`. In-memory SQLite URLs get a single long-lived connection,
    /// since every new connection would otherwise open an empty database.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();
        let dialect = Dialect::from_url(&config.database_url)?;

        let mut options = AnyPoolOptions::new()
            .max_connections(config.pool.max_connections)
            .max_lifetime(config.pool.max_lifetime)
            .acquire_timeout(Duration::from_secs(30))
            .test_before_acquire(true);
        if is_in_memory(&config.database_url) {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let url = redact(&config.database_url);
        tracing::debug!(url = %url, "connecting");
        let pool = options.connect(&config.database_url).await?;
        Ok(Db { pool, dialect, url })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Connection string with credentials stripped.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Statement text in this backend's placeholder style.
    pub fn sql<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        self.dialect.rewrite(sql)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn execute_ddl(&self, ddl: &str) -> Result<(), AppError> {
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(ddl).execute(&self.pool).await?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Generated id of a single-row insert on backends without `RETURNING`.
pub fn inserted_id(result: AnyQueryResult) -> Result<i64, sqlx::Error> {
    result
        .last_insert_id()
        .ok_or_else(|| sqlx::Error::Protocol("insert reported no generated id".into()))
}

/// True when the store rejected a write because of a unique index.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// `students` table plus the unique email index. The index is created separately so
/// databases made before it existed pick it up too. MySQL has no `CREATE INDEX IF NOT EXISTS`,
/// so there the key is declared with the table.
pub async fn ensure_students_table(db: &Db) -> Result<(), AppError> {
    let inline_key = match db.dialect {
        Dialect::MySql => ",\n            UNIQUE KEY students_email_key (email)",
        Dialect::Sqlite | Dialect::Postgres => "",
    };
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id {},
            name TEXT NOT NULL,
            email {} NOT NULL,
            course TEXT NOT NULL,
            mobile TEXT NOT NULL{}
        )
        "#,
        db.dialect.id_column(),
        db.dialect.short_text(),
        inline_key
    );
    db.execute_ddl(&ddl).await?;
    if db.dialect == Dialect::MySql {
        return Ok(());
    }
    db.execute_ddl("CREATE UNIQUE INDEX IF NOT EXISTS students_email_key ON students (email)")
        .await
}

pub async fn ensure_products_table(db: &Db) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id {},
            name VARCHAR(200) NOT NULL,
            price {} NOT NULL,
            stock {} NOT NULL DEFAULT 0,
            description {} NOT NULL DEFAULT ''
        )
        "#,
        db.dialect.id_column(),
        db.dialect.double(),
        db.dialect.bigint(),
        db.dialect.long_text()
    );
    db.execute_ddl(&ddl).await
}
