use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    Status,
    CurrentFrame,
    CurrentRoll,
    CurrentParticipantIndex,
    LockVersion,
    CreatedAt,
    UpdatedAt,
    EndedAt,
}

#[derive(Iden)]
enum GameParticipants {
    Table,
    Id,
    GameId,
    PlayerId,
    TurnOrder,
    CreatedAt,
}

#[derive(Iden)]
enum Rolls {
    Table,
    Id,
    GameId,
    PlayerId,
    Frame,
    RollIndex,
    PinCount,
    CreatedAt,
}

/// Unique constraint backing duplicate-roll detection; adapters match on this name.
pub const ROLLS_UNIQUE_POSITION: &str = "rolls_game_player_frame_roll_key";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::Name).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // games (one row per game; the turn state lives here)
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentFrame)
                            .small_integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(Games::CurrentFrame).between(1, 11)),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentRoll)
                            .small_integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(Games::CurrentRoll).between(1, 3)),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentParticipantIndex)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Games::CurrentParticipantIndex).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // game_participants (fixed rotation per game)
        manager
            .create_table(
                Table::create()
                    .table(GameParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameParticipants::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GameParticipants::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameParticipants::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameParticipants::TurnOrder)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(GameParticipants::TurnOrder).gte(0)),
                    )
                    .col(
                        ColumnDef::new(GameParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participants_game_id")
                            .from(GameParticipants::Table, GameParticipants::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_participants_player_id")
                            .from(GameParticipants::Table, GameParticipants::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("game_participants_game_player_key")
                    .table(GameParticipants::Table)
                    .col(GameParticipants::GameId)
                    .col(GameParticipants::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("game_participants_game_turn_key")
                    .table(GameParticipants::Table)
                    .col(GameParticipants::GameId)
                    .col(GameParticipants::TurnOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rolls (append-only history)
        manager
            .create_table(
                Table::create()
                    .table(Rolls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rolls::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rolls::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Rolls::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rolls::Frame)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Rolls::Frame).between(1, 10)),
                    )
                    .col(
                        ColumnDef::new(Rolls::RollIndex)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Rolls::RollIndex).between(1, 3)),
                    )
                    .col(
                        ColumnDef::new(Rolls::PinCount)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Rolls::PinCount).between(0, 10)),
                    )
                    .col(
                        ColumnDef::new(Rolls::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rolls_game_id")
                            .from(Rolls::Table, Rolls::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rolls_player_id")
                            .from(Rolls::Table, Rolls::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ROLLS_UNIQUE_POSITION)
                    .table(Rolls::Table)
                    .col(Rolls::GameId)
                    .col(Rolls::PlayerId)
                    .col(Rolls::Frame)
                    .col(Rolls::RollIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name(ROLLS_UNIQUE_POSITION)
                    .table(Rolls::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Rolls::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("game_participants_game_turn_key")
                    .table(GameParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("game_participants_game_player_key")
                    .table(GameParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GameParticipants::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
