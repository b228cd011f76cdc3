//! Backend test support utilities
//!
//! Shared helpers for the scorelane integration tests: one-time logging
//! initialization and assertions over RFC 7807 problem responses.

pub mod logging;
pub mod problem_details;
