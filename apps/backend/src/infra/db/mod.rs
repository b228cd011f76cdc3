//! Database infrastructure - connection management and migrations.

pub mod core;

pub use core::{bootstrap_db, build_admin_pool, build_pool, ensure_sqlite_dir};

pub use crate::config::db::{DbKind, DbOwner, RuntimeEnv};
