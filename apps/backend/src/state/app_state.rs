use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::game_locks::GameLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Serializes roll submissions per game
    pub game_locks: Arc<GameLocks>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Some(db),
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db() -> Self {
        Self {
            db: None,
            game_locks: Arc::new(GameLocks::new()),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
