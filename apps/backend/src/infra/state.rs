use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    env: RuntimeEnv,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: None,
            env: RuntimeEnv::Prod,
        }
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(db_kind) = self.db_kind {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(self.env, db_kind).await?;
            Ok(AppState::new(conn))
        } else {
            Ok(AppState::without_db())
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
