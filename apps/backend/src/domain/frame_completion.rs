//! Decides whether a participant's turn is over after a roll.

use crate::domain::pins::PinCount;
use crate::domain::rules::{FrameKind, PINS};
use crate::errors::domain::DomainError;

/// Outcome of inspecting a participant's rolls for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameProgress {
    /// The same participant rolls again.
    Continue,
    /// The turn passes to the next participant.
    Complete,
}

/// Classify the rolls recorded for one participant in one frame, in submission order.
///
/// The slice must include the roll just accepted. Sequences the rules cannot
/// produce are reported as invariant violations.
pub fn evaluate(frame: u8, rolls: &[PinCount]) -> Result<FrameProgress, DomainError> {
    let kind = FrameKind::of(frame)
        .ok_or_else(|| DomainError::invariant(format!("frame {frame} is outside 1..=10")))?;

    let sum = |a: &PinCount, b: &PinCount| a.value() + b.value();

    match (kind, rolls) {
        (_, []) => Err(DomainError::invariant(format!(
            "no rolls recorded for frame {frame}"
        ))),

        (FrameKind::Normal, [first]) if first.is_strike() => Ok(FrameProgress::Complete),
        (FrameKind::Normal, [_]) => Ok(FrameProgress::Continue),
        (FrameKind::Normal, [first, _]) if first.is_strike() => Err(DomainError::invariant(
            format!("second roll recorded after a strike in frame {frame}"),
        )),
        (FrameKind::Normal, [a, b]) if sum(a, b) > PINS => Err(DomainError::invariant(format!(
            "rolls in frame {frame} knock down {} pins",
            sum(a, b)
        ))),
        (FrameKind::Normal, [_, _]) => Ok(FrameProgress::Complete),
        (FrameKind::Normal, _) => Err(DomainError::invariant(format!(
            "{} rolls recorded in frame {frame}",
            rolls.len()
        ))),

        (FrameKind::Final, [_]) => Ok(FrameProgress::Continue),
        (FrameKind::Final, [a, b]) if !a.is_strike() && sum(a, b) > PINS => {
            Err(DomainError::invariant(format!(
                "first two rolls of the final frame knock down {} pins",
                sum(a, b)
            )))
        }
        (FrameKind::Final, [a, b]) if sum(a, b) < PINS => Ok(FrameProgress::Complete),
        (FrameKind::Final, [_, _]) => Ok(FrameProgress::Continue),
        (FrameKind::Final, [a, b, _]) if sum(a, b) < PINS => Err(DomainError::invariant(
            "bonus roll recorded without a strike or spare in the final frame",
        )),
        (FrameKind::Final, [_, _, _]) => Ok(FrameProgress::Complete),
        (FrameKind::Final, _) => Err(DomainError::invariant(format!(
            "{} rolls recorded in the final frame",
            rolls.len()
        ))),
    }
}

/// `true` when the participant's turn in `frame` is over.
pub fn is_turn_complete(rolls: &[PinCount], frame: u8) -> Result<bool, DomainError> {
    Ok(evaluate(frame, rolls)? == FrameProgress::Complete)
}

/// Pins left on the deck for the next roll, given the rolls already thrown in the frame.
///
/// The rack resets after a strike or spare, which only matters in the final frame.
pub fn pins_standing(rolls: &[PinCount]) -> u8 {
    rolls.iter().fold(PINS, |standing, roll| {
        match standing.saturating_sub(roll.value()) {
            0 => PINS,
            left => left,
        }
    })
}
