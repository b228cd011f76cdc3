//! Fixed parameters of a ten-pin game.

pub const FRAMES: u8 = 10;
pub const PINS: u8 = 10;
/// The frame with bonus rolls.
pub const FINAL_FRAME: u8 = FRAMES;
/// Largest rotation a game may be created with.
pub const MAX_PARTICIPANTS: usize = 8;

/// Shape of a frame: frames 1..=9 are normal, frame 10 allows bonus rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Normal,
    Final,
}

impl FrameKind {
    /// `None` for frame numbers outside 1..=10.
    pub fn of(frame: u8) -> Option<FrameKind> {
        match frame {
            1..=9 => Some(FrameKind::Normal),
            FINAL_FRAME => Some(FrameKind::Final),
            _ => None,
        }
    }

    pub fn max_rolls(self) -> u8 {
        match self {
            FrameKind::Normal => 2,
            FrameKind::Final => 3,
        }
    }
}
