use std::env;

use crate::error::AppError;

/// Which environment the database belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    /// Production database
    Prod,
    /// Test database - enforces safety rules
    Test,
}

/// Which database engine backs the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    /// Private in-memory SQLite database, one per connect
    SqliteMemory,
    /// SQLite file at `SQLITE_DB_PATH`
    SqliteFile,
}

impl DbKind {
    /// Read `DB_KIND` (defaults to postgres)
    pub fn from_env() -> Result<Self, AppError> {
        Self::parse(env::var("DB_KIND").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") | Some("postgres") => Ok(DbKind::Postgres),
            Some("sqlite-memory") => Ok(DbKind::SqliteMemory),
            Some("sqlite-file") => Ok(DbKind::SqliteFile),
            Some(other) => Err(AppError::config(format!(
                "DB_KIND must be one of postgres, sqlite-memory, sqlite-file; got '{other}'"
            ))),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbKind::SqliteMemory | DbKind::SqliteFile)
    }
}

/// Builds a database URL from environment variables
pub fn db_url(runtime_env: RuntimeEnv, kind: &DbKind) -> Result<String, AppError> {
    db_url_with(runtime_env, kind, |name| env::var(name).ok())
}

/// Same as [`db_url`] with an explicit variable lookup
pub fn db_url_with(
    runtime_env: RuntimeEnv,
    kind: &DbKind,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = db_name(runtime_env, &lookup)?;
            let username = must_var(&lookup, "APP_DB_USER")?;
            let password = must_var(&lookup, "APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteMemory => Ok(format!(
            "sqlite:file:memdb_{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4().simple()
        )),
        DbKind::SqliteFile => {
            let path = must_var(&lookup, "SQLITE_DB_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
    }
}

/// Get database name based on environment
fn db_name(
    runtime_env: RuntimeEnv,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    match runtime_env {
        RuntimeEnv::Prod => must_var(lookup, "PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var(lookup, "TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test environment requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get required variable or return error
fn must_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
