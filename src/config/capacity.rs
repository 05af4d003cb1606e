//! Capacity calculation configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::capacity::ModeWeights;

use super::error::ValidationError;

/// Work-mode weight configuration
///
/// Weights scale a member's effective capacity by where they work.
/// Values are multipliers in the `0..=1` range.
#[derive(Debug, Clone, Deserialize)]
pub struct CapacityConfig {
    /// Weight applied to office days
    #[serde(default = "default_office_weight")]
    pub office_weight: Decimal,

    /// Weight applied to work-from-home days
    #[serde(default = "default_remote_weight")]
    pub remote_weight: Decimal,

    /// Weight applied to hybrid days
    #[serde(default = "default_hybrid_weight")]
    pub hybrid_weight: Decimal,
}

impl CapacityConfig {
    /// Convert into the domain weight table
    pub fn mode_weights(&self) -> ModeWeights {
        ModeWeights {
            office: self.office_weight,
            remote_home: self.remote_weight,
            hybrid: self.hybrid_weight,
        }
    }

    /// Validate capacity configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for weight in [self.office_weight, self.remote_weight, self.hybrid_weight] {
            if weight < Decimal::ZERO || weight > Decimal::ONE {
                return Err(ValidationError::InvalidModeWeight);
            }
        }
        Ok(())
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            office_weight: default_office_weight(),
            remote_weight: default_remote_weight(),
            hybrid_weight: default_hybrid_weight(),
        }
    }
}

fn default_office_weight() -> Decimal {
    dec!(1.0)
}

fn default_remote_weight() -> Decimal {
    dec!(0.9)
}

fn default_hybrid_weight() -> Decimal {
    dec!(0.95)
}
