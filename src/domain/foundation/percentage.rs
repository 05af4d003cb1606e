//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a part/whole ratio, rounding half-up.
    ///
    /// Integer arithmetic only, so the result is reproducible across
    /// platforms. `whole == 0` yields zero percent.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let rounded = (part * 200 + whole) / (whole * 2);
        Self::new(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(101).is_err());
        assert!(Percentage::try_new(100).is_ok());
    }

    #[test]
    fn from_ratio_computes_exact_fifths() {
        assert_eq!(Percentage::from_ratio(4, 5).value(), 80);
        assert_eq!(Percentage::from_ratio(5, 5).value(), 100);
        assert_eq!(Percentage::from_ratio(0, 5).value(), 0);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67, 1/8 = 12.5 -> 13
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
    }

    #[test]
    fn from_ratio_with_zero_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(3, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_serializes_to_bare_number() {
        let pct = Percentage::new(42);
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
        let back: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(back.value(), 75);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }
}
