//! Redaction for strings that reach the logs, mostly raw database errors.
//!
//! Database error text can echo row values (player names in Postgres
//! `Key (..)=(..)` details, bound parameters in SQLite messages) and
//! occasionally credentials from connection URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled redaction patterns. Every pattern is a literal covered by the tests below.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// `user:password@` in connection URLs
    pub fn url_credentials() -> &'static Regex {
        static URL_CREDENTIALS: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"://[^:/@\s]+:[^@\s]+@").unwrap()
        });
        &URL_CREDENTIALS
    }

    /// Postgres constraint detail: `Key (name)=(Alice)`
    pub fn key_detail() -> &'static Regex {
        static KEY_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"Key \(([^()]*)\)=\([^()]*\)").unwrap()
        });
        &KEY_DETAIL
    }

    /// Single-quoted SQL string literals
    pub fn quoted_literal() -> &'static Regex {
        static QUOTED_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"'(?:[^']|'')*'").unwrap()
        });
        &QUOTED_LITERAL
    }

    /// Hex or base64-like runs of at least 24 characters
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap()
        });
        &OPAQUE_TOKEN
    }
}

/// Mask values that may carry player data or secrets.
///
/// Order: URL credentials, key details, literals, then opaque tokens, so
/// an earlier replacement is never re-matched by a later pattern.
pub fn redact(input: &str) -> String {
    let out = PiiRegexRegistry::url_credentials().replace_all(input, "://***:***@");
    let out = PiiRegexRegistry::key_detail().replace_all(&out, "Key ($1)=([REDACTED])");
    let out = PiiRegexRegistry::quoted_literal().replace_all(&out, "'[REDACTED]'");
    PiiRegexRegistry::opaque_token()
        .replace_all(&out, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on format, for use in `tracing` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_connection_credentials() {
        assert_eq!(
            redact("error connecting to postgresql://scorelane_app:hunter2@db:5432/scorelane"),
            "error connecting to postgresql://***:***@db:5432/scorelane"
        );
    }

    #[test]
    fn masks_postgres_key_detail() {
        assert_eq!(
            redact("duplicate key value violates unique constraint \"players_name_key\" DETAIL: Key (name)=(Alice Smith) already exists."),
            "duplicate key value violates unique constraint \"players_name_key\" DETAIL: Key (name)=([REDACTED]) already exists."
        );
    }

    #[test]
    fn masks_string_literals() {
        assert_eq!(
            redact("INSERT INTO players (name) VALUES ('O''Brien')"),
            "INSERT INTO players (name) VALUES ('[REDACTED]')"
        );
    }

    #[test]
    fn masks_long_tokens() {
        assert_eq!(
            redact("token a1b2c3d4e5f678901234567890123456 rejected"),
            "token [REDACTED_TOKEN] rejected"
        );
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn leaves_constraint_names_readable() {
        let msg = "UNIQUE constraint failed: rolls.game_id, rolls.player_id, rolls.frame, rolls.roll_index";
        assert_eq!(redact(msg), msg);
    }

    #[test]
    fn wrapper_redacts_in_display_and_debug() {
        let raw = "Key (name)=(Bob)";
        assert_eq!(format!("{}", Redacted(raw)), "Key (name)=([REDACTED])");
        assert_eq!(format!("{:?}", Redacted(raw)), "Key (name)=([REDACTED])");
        assert_eq!(redact(""), "");
    }
}
