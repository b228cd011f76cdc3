//! Roll history repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::rolls_sea as rolls_adapter;
use crate::domain::pins::PinCount;
use crate::domain::replay::HistoryRoll;
use crate::domain::state::RollPosition;
use crate::entities::rolls;
use crate::errors::domain::DomainError;

/// Roll domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub id: i64,
    pub game_id: i64,
    pub player_id: i64,
    pub frame: u8,
    pub roll_index: u8,
    pub pin_count: PinCount,
    pub created_at: time::OffsetDateTime,
}

impl Roll {
    pub fn as_history(&self) -> HistoryRoll {
        HistoryRoll {
            player_id: self.player_id,
            frame: self.frame,
            roll_index: self.roll_index,
            pin_count: self.pin_count,
        }
    }
}

/// Append one roll. A second write at the same position fails with `DuplicateRoll`.
pub async fn record_roll<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    position: RollPosition,
    pin_count: PinCount,
) -> Result<Roll, DomainError> {
    let dto = rolls_adapter::RollCreate::new(game_id, player_id)
        .at(i16::from(position.frame), i16::from(position.roll))
        .with_pin_count(i16::from(pin_count.value()));
    let model = rolls_adapter::create_roll(conn, dto).await?;
    Roll::try_from(model)
}

/// Pin counts a participant has in one frame, oldest first.
pub async fn frame_pins<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    frame: u8,
) -> Result<Vec<PinCount>, DomainError> {
    let rows = rolls_adapter::find_for_frame(conn, game_id, player_id, i16::from(frame)).await?;
    rows.into_iter()
        .map(|m| Roll::try_from(m).map(|r| r.pin_count))
        .collect()
}

pub async fn is_recorded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    position: RollPosition,
) -> Result<bool, DomainError> {
    Ok(rolls_adapter::exists_at(
        conn,
        game_id,
        player_id,
        i16::from(position.frame),
        i16::from(position.roll),
    )
    .await?)
}

/// Every roll of a game in insertion order.
pub async fn history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Roll>, DomainError> {
    rolls_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Roll::try_from)
        .collect()
}

impl TryFrom<rolls::Model> for Roll {
    type Error = DomainError;

    fn try_from(model: rolls::Model) -> Result<Self, Self::Error> {
        let corrupt = |column: &str, value: i16| {
            DomainError::invariant(format!("roll {} has {column} = {value}", model.id))
        };
        let frame = u8::try_from(model.frame).map_err(|_| corrupt("frame", model.frame))?;
        let roll_index =
            u8::try_from(model.roll_index).map_err(|_| corrupt("roll_index", model.roll_index))?;
        let pin_count = PinCount::try_from(i64::from(model.pin_count))
            .map_err(|_| corrupt("pin_count", model.pin_count))?;

        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            player_id: model.player_id,
            frame,
            roll_index,
            pin_count,
            created_at: model.created_at,
        })
    }
}
