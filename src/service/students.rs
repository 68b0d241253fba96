//! Student registry persistence: list, search, read, create, update, delete.
//!
//! Email uniqueness is checked before every write so the user gets a readable message, and is
//! also enforced by the `students_email_key` index. Two concurrent writes with the same email
//! can both pass the pre-check; the loser then fails on the index and is reported the same way.

use crate::error::AppError;
use crate::model::{Student, StudentForm};
use crate::service::validation::RequestValidator;
use crate::sql::contains_pattern;
use crate::store::{ensure_students_table, inserted_id, is_unique_violation, Db};
use sqlx::Row;

pub const EMAIL_TAKEN: &str = "Email already exists! Please use another email.";
pub const EMAIL_TAKEN_BY_OTHER: &str = "Email already exists for another student!";

const COLUMNS: &str = "id, name, email, course, mobile";

pub struct StudentService;

impl StudentService {
    /// Create the table and email index if missing.
    pub async fn init(db: &Db) -> Result<(), AppError> {
        ensure_students_table(db).await
    }

    /// All students, newest first.
    pub async fn list(db: &Db) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM students ORDER BY id DESC", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(db.pool()).await?;
        Ok(rows)
    }

    /// Students whose name contains `query`, ignoring case (ASCII only on SQLite). A missing or
    /// blank query lists everyone.
    pub async fn search(db: &Db, query: Option<&str>) -> Result<Vec<Student>, AppError> {
        let needle = match query.map(str::trim) {
            None | Some("") => return Self::list(db).await,
            Some(q) => q,
        };
        let pattern = contains_pattern(needle);
        let sql = format!(
            "SELECT {} FROM students WHERE {} ORDER BY id DESC",
            COLUMNS,
            db.dialect().contains_ci("name")
        );
        let sql = db.sql(&sql);
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        let rows = sqlx::query_as::<_, Student>(&sql)
            .bind(pattern)
            .fetch_all(db.pool())
            .await?;
        Ok(rows)
    }

    pub async fn read(db: &Db, id: i64) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM students WHERE id = ?", COLUMNS);
        let sql = db.sql(&sql);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(db.pool())
            .await?;
        Ok(row)
    }

    /// Whether a student other than `exclude_id` already uses `email`.
    pub async fn email_taken(db: &Db, email: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let found = match exclude_id {
            Some(id) => {
                let sql = db.sql("SELECT id FROM students WHERE email = ? AND id <> ? LIMIT 1");
                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(email)
                    .bind(id)
                    .fetch_optional(db.pool())
                    .await?
            }
            None => {
                let sql = db.sql("SELECT id FROM students WHERE email = ? LIMIT 1");
                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(email)
                    .fetch_optional(db.pool())
                    .await?
            }
        };
        Ok(found.is_some())
    }

    /// Validate and insert. Returns the stored row with its generated id.
    pub async fn create(db: &Db, form: &StudentForm) -> Result<Student, AppError> {
        let form = form.trimmed();
        validate(&form)?;
        if Self::email_taken(db, &form.email, None).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let sql = format!(
            "INSERT INTO students (name, email, course, mobile) VALUES (?, ?, ?, ?){}",
            db.dialect().returning_id()
        );
        let sql = db.sql(&sql);
        tracing::debug!(sql = %sql, "query");
        let query = sqlx::query(&sql)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.course)
            .bind(&form.mobile);
        let inserted = if db.dialect().returns_ids() {
            query.fetch_one(db.pool()).await.and_then(|row| row.try_get::<i64, _>(0))
        } else {
            query.execute(db.pool()).await.and_then(inserted_id)
        };
        let id = inserted.map_err(|e| conflict_on_unique(e, EMAIL_TAKEN))?;
        tracing::info!(id, "student created");

        Ok(Student {
            id,
            name: form.name,
            email: form.email,
            course: form.course,
            mobile: form.mobile,
        })
    }

    /// Validate and overwrite all four fields of student `id`.
    pub async fn update(db: &Db, id: i64, form: &StudentForm) -> Result<Student, AppError> {
        let form = form.trimmed();
        validate(&form)?;
        if Self::email_taken(db, &form.email, Some(id)).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN_BY_OTHER.into()));
        }

        let sql = db.sql("UPDATE students SET name = ?, email = ?, course = ?, mobile = ? WHERE id = ?");
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.course)
            .bind(&form.mobile)
            .bind(id)
            .execute(db.pool())
            .await
            .map_err(|e| conflict_on_unique(e, EMAIL_TAKEN_BY_OTHER))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("student {}", id)));
        }
        tracing::info!(id, "student updated");

        Ok(Student {
            id,
            name: form.name,
            email: form.email,
            course: form.course,
            mobile: form.mobile,
        })
    }

    /// Remove student `id`. Unknown ids are reported as not found.
    pub async fn delete(db: &Db, id: i64) -> Result<(), AppError> {
        let sql = db.sql("DELETE FROM students WHERE id = ?");
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(db.pool()).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("student {}", id)));
        }
        tracing::info!(id, "student deleted");
        Ok(())
    }
}

fn validate(form: &StudentForm) -> Result<(), AppError> {
    RequestValidator::require_filled(&[
        ("name", &form.name),
        ("email", &form.email),
        ("course", &form.course),
        ("mobile", &form.mobile),
    ])?;
    RequestValidator::mobile(&form.mobile)
}

fn conflict_on_unique(err: sqlx::Error, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(message.into())
    } else {
        AppError::Db(err)
    }
}
