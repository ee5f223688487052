use super::IrrigationRule;
use crate::logic::calculations::is_optimal_time;
use crate::models::SystemConditions;

/// ET0 needed to water inside a preferred window
pub const OPTIMAL_WINDOW_ET0_THRESHOLD: f64 = 2.5;

/// Optimal window rule - lowest threshold during the morning and evening
/// windows, when evaporative losses are smallest.
pub struct OptimalWindowRule;

impl IrrigationRule for OptimalWindowRule {
    fn id(&self) -> &'static str {
        "optimal_window"
    }

    fn name(&self) -> &'static str {
        "Optimal Window"
    }

    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool> {
        is_optimal_time(conditions.hour)
            .then_some(conditions.et0 > OPTIMAL_WINDOW_ET0_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::conditions;

    #[test]
    fn decides_inside_window() {
        let mut c = conditions(2.6);
        c.hour = 7;
        assert_eq!(OptimalWindowRule.evaluate(&c), Some(true));

        c.et0 = 2.5;
        c.hour = 19;
        assert_eq!(OptimalWindowRule.evaluate(&c), Some(false));
    }

    #[test]
    fn defers_outside_window() {
        let mut c = conditions(6.0);
        c.hour = 10;
        assert_eq!(OptimalWindowRule.evaluate(&c), None);
        c.hour = 0;
        assert_eq!(OptimalWindowRule.evaluate(&c), None);
    }
}
