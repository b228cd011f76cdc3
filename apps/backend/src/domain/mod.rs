//! Domain layer: the pure turn/frame progression of a bowling game.

pub mod frame_completion;
pub mod pins;
pub mod replay;
pub mod roll_gate;
pub mod rules;
pub mod state;
pub mod turn_mutator;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_lane;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_replay;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use frame_completion::{is_turn_complete, FrameProgress};
pub use pins::PinCount;
pub use roll_gate::{GateView, RollSubmission};
pub use rules::FrameKind;
pub use state::{GameStatus, RollPosition, TurnState};
