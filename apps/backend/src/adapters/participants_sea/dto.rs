//! DTOs for participants_sea adapter.

#[derive(Debug, Clone)]
pub struct ParticipantCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub turn_order: i16,
}

impl ParticipantCreate {
    pub fn new(game_id: i64, player_id: i64, turn_order: i16) -> Self {
        Self {
            game_id,
            player_id,
            turn_order,
        }
    }
}
