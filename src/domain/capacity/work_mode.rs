//! Work mode variants and their productivity weights.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A member's attendance modality.
///
/// The upstream data is a loosely-typed string, so unrecognized values are
/// preserved in `Unknown` rather than rejected; they carry weight 1.0
/// (fail-open) so a typo never blocks capacity entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkMode {
    Office,
    RemoteHome,
    Hybrid,
    Unknown(String),
}

impl WorkMode {
    /// Parses the wire string, preserving unrecognized values.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "office" => WorkMode::Office,
            "work-from-home" => WorkMode::RemoteHome,
            "hybrid" => WorkMode::Hybrid,
            other => WorkMode::Unknown(other.to_string()),
        }
    }

    /// Returns the wire string for this mode.
    pub fn as_wire(&self) -> &str {
        match self {
            WorkMode::Office => "office",
            WorkMode::RemoteHome => "work-from-home",
            WorkMode::Hybrid => "hybrid",
            WorkMode::Unknown(s) => s,
        }
    }
}

impl From<String> for WorkMode {
    fn from(s: String) -> Self {
        WorkMode::from_wire(&s)
    }
}

impl From<WorkMode> for String {
    fn from(mode: WorkMode) -> Self {
        mode.as_wire().to_string()
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Productivity weights per work mode.
///
/// Configurable per deployment; unknown modes always weigh 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeWeights {
    pub office: Decimal,
    pub remote_home: Decimal,
    pub hybrid: Decimal,
}

/// The stock weights: office 1.0, work-from-home 0.9, hybrid 0.95.
pub static DEFAULT_MODE_WEIGHTS: Lazy<ModeWeights> = Lazy::new(|| ModeWeights {
    office: dec!(1.0),
    remote_home: dec!(0.9),
    hybrid: dec!(0.95),
});

impl ModeWeights {
    /// Returns the weight for a mode. Unknown modes weigh 1.0.
    pub fn weight_for(&self, mode: &WorkMode) -> Decimal {
        match mode {
            WorkMode::Office => self.office,
            WorkMode::RemoteHome => self.remote_home,
            WorkMode::Hybrid => self.hybrid,
            WorkMode::Unknown(_) => Decimal::ONE,
        }
    }
}

impl Default for ModeWeights {
    fn default() -> Self {
        *DEFAULT_MODE_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_roundtrip_through_wire_strings() {
        for wire in ["office", "work-from-home", "hybrid"] {
            assert_eq!(WorkMode::from_wire(wire).as_wire(), wire);
        }
    }

    #[test]
    fn unrecognized_mode_is_preserved_not_rejected() {
        let mode = WorkMode::from_wire("onsite");
        assert_eq!(mode, WorkMode::Unknown("onsite".to_string()));
        assert_eq!(mode.as_wire(), "onsite");
    }

    #[test]
    fn default_weights_match_stock_values() {
        let weights = ModeWeights::default();
        assert_eq!(weights.weight_for(&WorkMode::Office), dec!(1.0));
        assert_eq!(weights.weight_for(&WorkMode::RemoteHome), dec!(0.9));
        assert_eq!(weights.weight_for(&WorkMode::Hybrid), dec!(0.95));
    }

    #[test]
    fn unknown_mode_weighs_one_regardless_of_config() {
        let weights = ModeWeights {
            office: dec!(0.5),
            remote_home: dec!(0.5),
            hybrid: dec!(0.5),
        };
        let mode = WorkMode::Unknown("sabbatical".to_string());
        assert_eq!(weights.weight_for(&mode), Decimal::ONE);
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&WorkMode::RemoteHome).unwrap();
        assert_eq!(json, "\"work-from-home\"");
        let back: WorkMode = serde_json::from_str("\"remote\"").unwrap();
        assert_eq!(back, WorkMode::Unknown("remote".to_string()));
    }
}
