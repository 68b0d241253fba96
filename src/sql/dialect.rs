//! Backend detection from the connection string and the few places the SQL differs.

use super::builder::LIKE_ESCAPE;
use crate::error::ConfigError;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgres,
    MySql,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let lower = url.trim().to_ascii_lowercase();
        if lower.starts_with("sqlite:") {
            Ok(Dialect::Sqlite)
        } else if lower.starts_with("postgres://") || lower.starts_with("postgresql://") {
            Ok(Dialect::Postgres)
        } else if lower.starts_with("mysql://") {
            Ok(Dialect::MySql)
        } else {
            Err(ConfigError::UnsupportedDatabase(redact(url)))
        }
    }

    /// Human readable backend name shown on listing pages.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "SQLite",
            Dialect::Postgres => "PostgreSQL",
            Dialect::MySql => "MySQL",
        }
    }

    /// Auto-generated 64-bit primary key column definition.
    pub fn id_column(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
            Dialect::MySql => "BIGINT AUTO_INCREMENT PRIMARY KEY",
        }
    }

    /// Whether `INSERT ... RETURNING id` is available. MySQL reports the id on the result.
    pub fn returns_ids(&self) -> bool {
        !matches!(self, Dialect::MySql)
    }

    /// Suffix appended to inserts whose generated id the caller wants back.
    pub fn returning_id(&self) -> &'static str {
        if self.returns_ids() {
            " RETURNING id"
        } else {
            ""
        }
    }

    pub fn bigint(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER",
            Dialect::Postgres | Dialect::MySql => "BIGINT",
        }
    }

    pub fn double(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "REAL",
            Dialect::Postgres => "DOUBLE PRECISION",
            Dialect::MySql => "DOUBLE",
        }
    }

    /// Text type for a column that is indexed or carries a literal default. MySQL allows
    /// neither on `TEXT`.
    pub fn short_text(&self) -> &'static str {
        match self {
            Dialect::Sqlite | Dialect::Postgres => "TEXT",
            Dialect::MySql => "VARCHAR(255)",
        }
    }

    pub fn long_text(&self) -> &'static str {
        match self {
            Dialect::Sqlite | Dialect::Postgres => "TEXT",
            Dialect::MySql => "VARCHAR(2000)",
        }
    }

    /// `column` contains the bound pattern, ignoring case. SQLite `LIKE` and MySQL's default
    /// collations already ignore case; PostgreSQL needs `ILIKE`.
    pub fn contains_ci(&self, column: &str) -> String {
        let op = match self {
            Dialect::Sqlite | Dialect::MySql => "LIKE",
            Dialect::Postgres => "ILIKE",
        };
        format!("{} {} ? ESCAPE '{}'", column, op, LIKE_ESCAPE)
    }

    /// Statements are written with `?` placeholders; PostgreSQL wants `$1, $2, ...`.
    /// Question marks inside single-quoted literals are left alone.
    pub fn rewrite<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        match self {
            Dialect::Sqlite | Dialect::MySql => Cow::Borrowed(sql),
            Dialect::Postgres => {
                let mut out = String::with_capacity(sql.len() + 8);
                let mut index = 0;
                let mut in_literal = false;
                for ch in sql.chars() {
                    match ch {
                        '\'' => {
                            in_literal = !in_literal;
                            out.push(ch);
                        }
                        '?' if !in_literal => {
                            index += 1;
                            out.push('$');
                            out.push_str(&index.to_string());
                        }
                        _ => out.push(ch),
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}

/// Strip credentials before a URL ends up in an error message or a log line.
pub fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
