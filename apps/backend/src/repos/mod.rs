//! Repository functions for the domain layer.
//!
//! Each repo wraps its `*_sea` adapter, converting SeaORM models into domain
//! models and `DbErr` into `DomainError`.

pub mod games;
pub mod participants;
pub mod players;
pub mod rolls;
