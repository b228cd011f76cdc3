//! Error codes for the Scorelane API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller identity
    /// `player-id` header missing
    Unauthorized,

    // Request Validation
    InvalidGameId,
    /// Invalid or missing HTTP header
    InvalidHeader,
    InvalidPlayerName,
    /// Empty, oversized or repeating roster
    InvalidRoster,
    /// Pin count out of range or more than the pins standing
    InvalidPinCount,
    /// Submitter is not the current participant, or named the wrong position
    OutOfTurn,
    /// No further rolls accepted
    GameAlreadyCompleted,
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    /// Player is not part of the game's rotation
    ParticipantNotFound,
    NotFound,

    // Conflicts
    DuplicateRoll,
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    InternalError,
    ConfigError,
    /// Persisted state contradicts the turn rules
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::InvalidPinCount => "INVALID_PIN_COUNT",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::GameAlreadyCompleted => "GAME_ALREADY_COMPLETED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::ParticipantNotFound => "PARTICIPANT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateRoll => "DUPLICATE_ROLL",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        Self::Unauthorized,
        Self::InvalidGameId,
        Self::InvalidHeader,
        Self::InvalidPlayerName,
        Self::InvalidRoster,
        Self::InvalidPinCount,
        Self::OutOfTurn,
        Self::GameAlreadyCompleted,
        Self::ValidationError,
        Self::BadRequest,
        Self::GameNotFound,
        Self::PlayerNotFound,
        Self::ParticipantNotFound,
        Self::NotFound,
        Self::DuplicateRoll,
        Self::OptimisticLock,
        Self::Conflict,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::InternalError,
        Self::ConfigError,
        Self::DataCorruption,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
