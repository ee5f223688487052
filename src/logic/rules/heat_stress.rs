use super::IrrigationRule;
use crate::models::SystemConditions;

/// Air temperature (°C) above which plants are under heat stress
pub const HEAT_STRESS_TEMP_C: f64 = 35.0;

/// ET0 needed to water under heat stress
pub const HEAT_STRESS_ET0_THRESHOLD: f64 = 3.0;

/// Heat stress rule - relaxes the threshold outside the preferred windows
/// when it is strictly hotter than 35°C.
pub struct HeatStressRule;

impl IrrigationRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        (conditions.temperature_c > HEAT_STRESS_TEMP_C)
            .then_some(conditions.et0 > HEAT_STRESS_ET0_THRESHOLD)
    }
}
