use super::IrrigationRule;
use crate::models::SystemConditions;

/// Below this ET0 (mm/day) there is no water demand worth acting on
pub const MIN_DEMAND_ET0: f64 = 2.0;

/// ET0 the default rule needs when nothing more specific applies
pub const DEFAULT_ET0_THRESHOLD: f64 = 3.5;

/// Low demand rule - never water when evapotranspiration is negligible
pub struct LowDemandRule;

impl IrrigationRule for LowDemandRule {
    fn id(&self) -> &'static str {
        "low_demand"
    }

    fn name(&self) -> &'static str {
        "Low Demand"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        (conditions.et0 < MIN_DEMAND_ET0).then_some(false)
    }
}

/// Default threshold rule - closes the cascade, always decides
pub struct DefaultThresholdRule;

impl DefaultThresholdRule {
    pub fn verdict(&self, conditions: &SystemConditions) -> bool {
        conditions.et0 > DEFAULT_ET0_THRESHOLD
    }
}

impl IrrigationRule for DefaultThresholdRule {
    fn id(&self) -> &'static str {
        "default_threshold"
    }

    fn name(&self) -> &'static str {
        "Default Threshold"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        Some(self.verdict(conditions))
    }
}
