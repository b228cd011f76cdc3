//! Database configuration read from the environment.
//!
//! `make_conn_spec` turns a (runtime env, db kind, owner) triple into a
//! connection URL. Postgres credentials depend on the owner: the app role for
//! the server, the owner role for migrations.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

/// Which database engine to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Read `DB_KIND`, defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!("Unknown DB_KIND '{other}'"))),
        }
    }
}

/// Selects the database name (and its safety rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

impl FromStr for RuntimeEnv {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(RuntimeEnv::Prod),
            "test" => Ok(RuntimeEnv::Test),
            other => Err(AppError::config(format!("Unknown runtime env '{other}'"))),
        }
    }
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Per-connection session settings applied in the pool's `after_connect` hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbSettings {
    Sqlite {
        busy_timeout_ms: u32,
    },
    Postgres {
        app_name: String,
        statement_timeout: String,
        idle_in_transaction_timeout: String,
    },
}

/// Pool sizing and session settings for one database kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub pool_min: u32,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    pub db_settings: DbSettings,
}

impl ConnectionSettings {
    pub fn for_kind(db_kind: DbKind) -> Self {
        match db_kind {
            // every connection to sqlite::memory: is its own database
            DbKind::SqliteMemory => Self {
                pool_min: 1,
                pool_max: 1,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
            DbKind::SqliteFile => Self {
                pool_min: 1,
                pool_max: 4,
                acquire_timeout_ms: 5_000,
                db_settings: DbSettings::Sqlite {
                    busy_timeout_ms: 5_000,
                },
            },
            DbKind::Postgres => Self {
                pool_min: 2,
                pool_max: 16,
                acquire_timeout_ms: 2_000,
                db_settings: DbSettings::Postgres {
                    app_name: "scorelane".to_string(),
                    statement_timeout: "15s".to_string(),
                    idle_in_transaction_timeout: "30s".to_string(),
                },
            },
        }
    }
}

/// Check the environment carries everything `make_conn_spec` will need.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), AppError> {
    make_conn_spec(env, db_kind, DbOwner::App)?;
    if db_kind == DbKind::Postgres {
        make_conn_spec(env, db_kind, DbOwner::Owner)?;
    }
    Ok(())
}

/// Build a connection URL for the given environment, engine and owner.
pub fn make_conn_spec(env: RuntimeEnv, db_kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    match db_kind {
        DbKind::Postgres => {
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{}:{}/{}",
                host(),
                port(),
                db_name(env)?
            ))
        }
        DbKind::SqliteFile => Ok(format!(
            "sqlite://{}?mode=rwc",
            sqlite_file_path(env).display()
        )),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Location of the SQLite database file for `env`.
pub fn sqlite_file_path(env: RuntimeEnv) -> PathBuf {
    let dir = env::var("SQLITE_DB_DIR").unwrap_or_else(|_| "./data".to_string());
    let file = match env {
        RuntimeEnv::Prod => "scorelane.db",
        RuntimeEnv::Test => "scorelane_test.db",
    };
    PathBuf::from(dir).join(file)
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(env: RuntimeEnv) -> Result<String, AppError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test environment requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("SCORELANE_OWNER_USER")?,
            must_var("SCORELANE_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
