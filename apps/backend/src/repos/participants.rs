//! Participant repository functions: a game's rotation.

use sea_orm::ConnectionTrait;

use crate::adapters::participants_sea as participants_adapter;
use crate::errors::domain::DomainError;

/// One seat in a game's rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub player_id: i64,
    pub name: String,
    pub turn_order: u8,
}

/// Seat `player_ids` in the given order (turn_order 0..N-1).
pub async fn seat_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_ids: &[i64],
) -> Result<(), DomainError> {
    for (order, player_id) in player_ids.iter().enumerate() {
        let turn_order = i16::try_from(order).map_err(|_| {
            DomainError::validation_other(format!("Too many participants: {}", player_ids.len()))
        })?;
        participants_adapter::create_participant(
            conn,
            participants_adapter::ParticipantCreate::new(game_id, *player_id, turn_order),
        )
        .await?;
    }
    Ok(())
}

/// Participants of a game in turn order, with player names.
pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Participant>, DomainError> {
    let rows = participants_adapter::list_by_game(conn, game_id).await?;
    rows.into_iter()
        .map(|(seat, player)| {
            let player = player.ok_or_else(|| {
                DomainError::invariant(format!(
                    "participant {} of game {game_id} has no player row",
                    seat.player_id
                ))
            })?;
            let turn_order = u8::try_from(seat.turn_order).map_err(|_| {
                DomainError::invariant(format!(
                    "participant {} of game {game_id} has turn_order {}",
                    seat.player_id, seat.turn_order
                ))
            })?;
            Ok(Participant {
                player_id: seat.player_id,
                name: player.name,
                turn_order,
            })
        })
        .collect()
}

/// Player ids of the rotation, in turn order.
pub async fn rotation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(participants_adapter::rotation_ids(conn, game_id).await?)
}
