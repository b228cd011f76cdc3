use serde::{Deserialize, Serialize};

use crate::domain::rules::PINS;
use crate::errors::domain::{DomainError, ValidationKind};

/// Number of pins knocked down by one roll, always within 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PinCount(u8);

impl PinCount {
    pub const STRIKE: PinCount = PinCount(PINS);

    pub fn new(pins: u8) -> Result<Self, DomainError> {
        if pins > PINS {
            return Err(DomainError::validation(
                ValidationKind::InvalidPinCount,
                format!("Pin count must be between 0 and {PINS}, got {pins}"),
            ));
        }
        Ok(PinCount(pins))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_strike(self) -> bool {
        self.0 == PINS
    }
}

impl TryFrom<i64> for PinCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let pins = u8::try_from(value).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidPinCount,
                format!("Pin count must be between 0 and {PINS}, got {value}"),
            )
        })?;
        PinCount::new(pins)
    }
}

impl From<PinCount> for u8 {
    fn from(p: PinCount) -> u8 {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for pins in 0..=10u8 {
            assert_eq!(PinCount::new(pins).unwrap().value(), pins);
        }
        assert!(PinCount::new(10).unwrap().is_strike());
        assert!(!PinCount::new(9).unwrap().is_strike());
    }

    #[test]
    fn rejects_out_of_range() {
        for raw in [-1i64, 11, 255, 1000] {
            match PinCount::try_from(raw) {
                Err(DomainError::Validation(ValidationKind::InvalidPinCount, _)) => {}
                other => panic!("expected InvalidPinCount for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: PinCount = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<PinCount>("11").is_err());
        assert!(serde_json::from_str::<PinCount>("-3").is_err());
    }
}
