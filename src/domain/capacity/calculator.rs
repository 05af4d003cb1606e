//! Effective capacity calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::work_mode::{ModeWeights, WorkMode};
use crate::domain::foundation::Percentage;

/// Computes a member's effective capacity in days:
///
/// `(working_days − leaves) × (availability / 100) × mode_weight`
///
/// Pure and deterministic: identical inputs always yield the identical
/// `Decimal`, which is why this uses fixed-point arithmetic rather than
/// floats. The result is **not** clamped — when `leaves` exceeds
/// `working_days` the value goes negative and callers decide how to
/// present it.
pub fn effective_capacity_days(
    working_days: u32,
    leaves: Decimal,
    availability: Percentage,
    work_mode: &WorkMode,
    weights: &ModeWeights,
) -> Decimal {
    let available_fraction = Decimal::from(availability.value()) / dec!(100);
    (Decimal::from(working_days) - leaves) * available_fraction * weights.weight_for(work_mode)
}
