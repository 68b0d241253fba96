//! Product catalog server. The store comes from `DATABASE_URL` (SQLite file by default); the
//! table is created and seeded on first start. Any startup failure exits non-zero.

use classroom_crud::config::PRODUCTS_DEFAULT_DATABASE_URL;
use classroom_crud::sql::redact;
use classroom_crud::telemetry::init_tracing;
use classroom_crud::{product_app, AppConfig, AppError, AppState, Db, ProductService};
use tokio::net::TcpListener;

async fn open_store(config: &AppConfig) -> Result<Db, AppError> {
    let db = Db::connect(config).await?;
    ProductService::init(&db).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env(PRODUCTS_DEFAULT_DATABASE_URL)?;
    if config.uses_fallback_secret() {
        tracing::warn!("SECRET_KEY is not set; flash cookies are signed with the fallback secret");
    }

    let db = match open_store(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "database initialization failed");
            return Err(e.into());
        }
    };
    tracing::info!(
        url = %redact(&config.database_url),
        backend = db.dialect().name(),
        "database initialized"
    );

    let app = product_app(AppState::new(db, &config));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
