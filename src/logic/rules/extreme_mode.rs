use super::IrrigationRule;
use crate::logic::calculations::is_optimal_time;
use crate::models::{IrrigationMode, SystemConditions};

/// ET0 extreme mode requires before it waters at all
pub const EXTREME_ET0_THRESHOLD: f64 = 5.0;

/// Extreme mode rule - only severe demand inside a preferred window.
///
/// The cascade reaches this rule only outside the preferred windows, so in
/// place it always answers `false` for extreme mode. Kept as is until the
/// watering policy for extreme mode is settled.
pub struct ExtremeModeRule;

impl IrrigationRule for ExtremeModeRule {
    fn id(&self) -> &'static str {
        "extreme_mode"
    }

    fn name(&self) -> &'static str {
        "Extreme Mode"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        (conditions.mode == IrrigationMode::Extreme)
            .then(|| conditions.et0 > EXTREME_ET0_THRESHOLD && is_optimal_time(conditions.hour))
    }
}
