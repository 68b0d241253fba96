//! Student registry server. Reads `.env` and the environment, prepares the `students` table,
//! then serves until stopped. Any startup failure exits non-zero.

use classroom_crud::config::STUDENTS_DEFAULT_DATABASE_URL;
use classroom_crud::sql::redact;
use classroom_crud::telemetry::init_tracing;
use classroom_crud::{student_app, AppConfig, AppError, AppState, Db, StudentService};
use tokio::net::TcpListener;

async fn open_store(config: &AppConfig) -> Result<Db, AppError> {
    let db = Db::connect(config).await?;
    StudentService::init(&db).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env(STUDENTS_DEFAULT_DATABASE_URL)?;
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
    tracing::info!(url = %redact(&config.database_url), "database initialized");

    let app = student_app(AppState::new(db, &config));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
