//! Game service: creation with a roster, the game view and roll history.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;
use tracing::info;

use super::normalize_name;
use crate::domain::rules::MAX_PARTICIPANTS;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::{self, Game};
use crate::repos::participants::{self, Participant};
use crate::repos::players;
use crate::repos::rolls::{self, Roll};

/// Who sits in a new game, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    /// Create one new player per name.
    NewPlayers(Vec<String>),
    /// Seat players that already exist.
    Existing(Vec<i64>),
}

impl Roster {
    fn len(&self) -> usize {
        match self {
            Roster::NewPlayers(names) => names.len(),
            Roster::Existing(ids) => ids.len(),
        }
    }
}

/// A game with its rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub game: Game,
    pub participants: Vec<Participant>,
}

impl GameView {
    /// Player whose roll is next; `None` once the game is done.
    pub fn current_player_id(&self) -> Option<i64> {
        if self.game.turn.is_done() {
            return None;
        }
        self.participants
            .get(usize::from(self.game.turn.current_participant_index))
            .map(|p| p.player_id)
    }
}

/// A history entry with the roller's name.
#[derive(Debug, Clone, PartialEq)]
pub struct RollEntry {
    pub roll: Roll,
    pub player_name: String,
}

#[derive(Default)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game at the initial TurnState with `roster` seated in order.
    ///
    /// Run inside one transaction: a failure part-way leaves nothing behind.
    pub async fn create_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        roster: Roster,
    ) -> Result<GameView, DomainError> {
        let name = normalize_name(name).ok_or_else(|| {
            DomainError::validation_other("Game name must be between 1 and 64 characters")
        })?;

        let size = roster.len();
        if size == 0 || size > MAX_PARTICIPANTS {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                format!("A game needs between 1 and {MAX_PARTICIPANTS} players, got {size}"),
            ));
        }

        let player_ids = match roster {
            Roster::NewPlayers(names) => {
                let mut ids = Vec::with_capacity(names.len());
                for raw in &names {
                    let player_name = normalize_name(raw).ok_or_else(|| {
                        DomainError::validation(
                            ValidationKind::InvalidPlayerName,
                            "Player name must be between 1 and 64 characters",
                        )
                    })?;
                    ids.push(players::create_player(conn, &player_name).await?.id);
                }
                ids
            }
            Roster::Existing(ids) => {
                let mut seen = HashSet::new();
                if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidRoster,
                        format!("Player {dup} appears more than once"),
                    ));
                }
                players::require_many(conn, &ids).await?;
                ids
            }
        };

        let game = games::create_game(conn, &name).await?;
        participants::seat_players(conn, game.id, &player_ids).await?;
        info!(game_id = game.id, participants = player_ids.len(), "Game created");

        self.game_view(conn, game.id).await
    }

    pub async fn game_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameView, DomainError> {
        let game = games::require_game(conn, game_id).await?;
        let participants = participants::list_for_game(conn, game_id).await?;
        Ok(GameView { game, participants })
    }

    /// Every roll of the game in the order it was accepted.
    pub async fn roll_history<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Vec<RollEntry>, DomainError> {
        games::require_game(conn, game_id).await?;
        let seats = participants::list_for_game(conn, game_id).await?;
        let history = rolls::history(conn, game_id).await?;

        history
            .into_iter()
            .map(|roll| {
                let player_name = seats
                    .iter()
                    .find(|p| p.player_id == roll.player_id)
                    .map(|p| p.name.clone())
                    .ok_or_else(|| {
                        DomainError::invariant(format!(
                            "roll {} belongs to player {} who is not seated in game {game_id}",
                            roll.id, roll.player_id
                        ))
                    })?;
                Ok(RollEntry { roll, player_name })
            })
            .collect()
    }
}
