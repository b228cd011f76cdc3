// Proptest generators for turn progression.
// Games are generated valid by construction: each raw value is folded into
// the pins actually standing, so no case is ever rejected.

use proptest::prelude::*;

use crate::domain::rules::{FRAMES, MAX_PARTICIPANTS};

/// Rotation sizes a game can be created with.
pub fn rotation_size() -> impl Strategy<Value = usize> {
    1usize..=MAX_PARTICIPANTS
}

/// Raw roll intents; enough for a full game of any rotation (21 rolls max per participant).
pub fn raw_rolls() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=10, (usize::from(FRAMES) * 2 + 1) * MAX_PARTICIPANTS)
}

/// Raw intents biased toward strikes and spares so bonus paths are exercised.
pub fn raw_rolls_heavy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![3 => Just(10u8), 1 => 0u8..=10],
        (usize::from(FRAMES) * 2 + 1) * MAX_PARTICIPANTS,
    )
}

/// Rotation size plus raw intents.
pub fn game_plan() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (rotation_size(), prop_oneof![raw_rolls(), raw_rolls_heavy()])
}
