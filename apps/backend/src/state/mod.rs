pub mod app_state;
pub mod game_locks;

pub use app_state::AppState;
pub use game_locks::{GameGuard, GameLocks};
