//! Per-game async mutexes that serialize roll submissions within one process.
//!
//! The database still guards correctness through the roll uniqueness index
//! and the games `lock_version`; the mutex only keeps concurrent submissions
//! for the same game from racing each other into conflicts.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

/// Exclusive access to one game. Dropping it releases the mutex and evicts
/// the game's entry once nobody else holds or waits on it.
#[derive(Debug)]
pub struct GameGuard<'a> {
    locks: &'a GameLocks,
    game_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // waiters clone the Arc under the shard lock before awaiting, so a
        // count of one means the map holds the only reference
        self.locks
            .locks
            .remove_if(&self.game_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `game_id`. Released when the guard drops.
    pub async fn acquire(&self, game_id: i64) -> GameGuard<'_> {
        let lock = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        let guard = lock.lock_owned().await;
        GameGuard {
            locks: self,
            game_id,
            guard: Some(guard),
        }
    }

    /// Number of games currently locked or contended.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
