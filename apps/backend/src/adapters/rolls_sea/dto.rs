//! DTOs for rolls_sea adapter.

/// One accepted roll, written exactly once.
#[derive(Debug, Clone)]
pub struct RollCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub frame: i16,
    pub roll_index: i16,
    pub pin_count: i16,
}

impl RollCreate {
    pub fn new(game_id: i64, player_id: i64) -> Self {
        Self {
            game_id,
            player_id,
            frame: 1,
            roll_index: 1,
            pin_count: 0,
        }
    }

    pub fn at(mut self, frame: i16, roll_index: i16) -> Self {
        self.frame = frame;
        self.roll_index = roll_index;
        self
    }

    pub fn with_pin_count(mut self, pin_count: i16) -> Self {
        self.pin_count = pin_count;
        self
    }
}
