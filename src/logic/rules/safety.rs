use super::IrrigationRule;
use crate::models::SystemConditions;

/// Reservoir level (ml) below which the pump must never run
pub const MIN_WATER_LEVEL_ML: u32 = 500;

/// On battery only demand at or above this ET0 justifies watering
pub const BATTERY_ET0_THRESHOLD: f64 = 4.0;

/// Water reserve rule - hard floor on the reservoir level
///
/// Overrides every other factor, including very high demand.
pub struct WaterReserveRule;

impl IrrigationRule for WaterReserveRule {
    fn id(&self) -> &'static str {
        "water_reserve"
    }

    fn name(&self) -> &'static str {
        "Water Reserve"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        (conditions.water_level_ml < MIN_WATER_LEVEL_ML).then_some(false)
    }
}

/// Power conservation rule - hold off on battery unless demand is severe
pub struct PowerConservationRule;

impl IrrigationRule for PowerConservationRule {
    fn id(&self) -> &'static str {
        "power_conservation"
    }

    fn name(&self) -> &'static str {
        "Power Conservation"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        (!conditions.power_available && conditions.et0 < BATTERY_ET0_THRESHOLD).then_some(false)
    }
}
