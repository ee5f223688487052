use super::{
    demand::{DefaultThresholdRule, LowDemandRule, MIN_DEMAND_ET0},
    extreme_mode::ExtremeModeRule,
    heat_stress::{HeatStressRule, HEAT_STRESS_TEMP_C},
    optimal_window::OptimalWindowRule,
    safety::{PowerConservationRule, WaterReserveRule},
    IrrigationRule,
};
use crate::error::{IrrigOpsError, Result};
use crate::logic::calculations::{is_optimal_time, scale_truncate};
use crate::models::{Decision, IrrigationMode, SystemConditions};
use serde::Serialize;

/// Seconds of watering per mm/day of ET0 above the demand floor
const SECONDS_PER_MM: f64 = 10.0;

const HEAT_STRESS_FACTOR: f64 = 1.3;
const CONSERVATION_FACTOR: f64 = 0.7;
const EXTREME_FACTOR: f64 = 0.5;
const BATTERY_FACTOR: f64 = 0.8;
const OPTIMAL_WINDOW_FACTOR: f64 = 1.1;

/// Which rule settled the cascade, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleVerdict {
    pub rule_id: &'static str,
    pub should_irrigate: bool,
}

/// Turns a conditions snapshot into a water / no-water decision.
///
/// Rules run in a fixed priority order and the first one with an opinion
/// wins. Duration bounds are fixed at construction; the engine holds no
/// other state and can be shared freely between threads.
pub struct IrrigationDecisionEngine {
    min_duration: u32,
    max_duration: u32,
    rules: Vec<Box<dyn IrrigationRule>>,
    fallback: DefaultThresholdRule,
}

impl IrrigationDecisionEngine {
    pub fn configure(min_duration: u32, max_duration: u32) -> Result<Self> {
        if min_duration > max_duration {
            return Err(IrrigOpsError::MisconfiguredBounds {
                min: min_duration,
                max: max_duration,
            });
        }

        tracing::info!(min_duration, max_duration, "Decision engine configured");

        Ok(Self::with_bounds(min_duration, max_duration))
    }

    fn with_bounds(min_duration: u32, max_duration: u32) -> Self {
        // Priority order; the first rule with an opinion decides
        let rules: Vec<Box<dyn IrrigationRule>> = vec![
            Box::new(LowDemandRule),
            Box::new(WaterReserveRule),
            Box::new(PowerConservationRule),
            Box::new(OptimalWindowRule),
            Box::new(HeatStressRule),
            Box::new(ExtremeModeRule),
        ];

        Self {
            min_duration,
            max_duration,
            rules,
            fallback: DefaultThresholdRule,
        }
    }

    pub fn min_duration(&self) -> u32 {
        self.min_duration
    }

    pub fn max_duration(&self) -> u32 {
        self.max_duration
    }

    /// Run the cascade and report which rule decided
    pub fn evaluate(&self, conditions: &SystemConditions) -> RuleVerdict {
        let verdict = self
            .rules
            .iter()
            .find_map(|rule| {
                rule.evaluate(conditions).map(|should_irrigate| RuleVerdict {
                    rule_id: rule.id(),
                    should_irrigate,
                })
            })
            .unwrap_or_else(|| RuleVerdict {
                rule_id: self.fallback.id(),
                should_irrigate: self.fallback.verdict(conditions),
            });

        tracing::debug!(
            rule = verdict.rule_id,
            should_irrigate = verdict.should_irrigate,
            et0 = conditions.et0,
            hour = conditions.hour,
            "Irrigation rule matched"
        );

        verdict
    }

    pub fn should_irrigate(&self, conditions: &SystemConditions) -> bool {
        self.evaluate(conditions).should_irrigate
    }

    /// Watering time in seconds, clamped to the configured bounds.
    ///
    /// Only meaningful when [`should_irrigate`](Self::should_irrigate) is
    /// true. Every adjustment truncates before the next one is applied.
    pub fn calculate_duration(&self, conditions: &SystemConditions) -> u32 {
        let mut base = ((conditions.et0 - MIN_DEMAND_ET0) * SECONDS_PER_MM) as i64;

        if conditions.temperature_c > HEAT_STRESS_TEMP_C {
            base = scale_truncate(base, HEAT_STRESS_FACTOR);
        }

        match conditions.mode {
            IrrigationMode::Conservation => base = scale_truncate(base, CONSERVATION_FACTOR),
            IrrigationMode::Extreme => base = scale_truncate(base, EXTREME_FACTOR),
            IrrigationMode::Normal => {}
        }

        if !conditions.power_available {
            base = scale_truncate(base, BATTERY_FACTOR);
        }

        if is_optimal_time(conditions.hour) {
            base = scale_truncate(base, OPTIMAL_WINDOW_FACTOR);
        }

        if base < i64::from(self.min_duration) {
            self.min_duration
        } else if base > i64::from(self.max_duration) {
            self.max_duration
        } else {
            // Within [min, max], so it fits
            base as u32
        }
    }

    pub fn make_decision(&self, conditions: &SystemConditions) -> Decision {
        if self.should_irrigate(conditions) {
            Decision::irrigate(self.calculate_duration(conditions))
        } else {
            Decision::skip()
        }
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.id(), r.name()))
            .chain(std::iter::once((self.fallback.id(), self.fallback.name())))
            .collect()
    }
}

impl Default for IrrigationDecisionEngine {
    /// 5 to 60 seconds
    fn default() -> Self {
        Self::with_bounds(5, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::conditions;
    use proptest::prelude::*;

    fn engine() -> IrrigationDecisionEngine {
        IrrigationDecisionEngine::configure(5, 60).unwrap()
    }

    fn scenario(
        et0: f64,
        temperature_c: f64,
        humidity_percent: f64,
        hour: u8,
        power_available: bool,
        water_level_ml: u32,
        mode: IrrigationMode,
    ) -> SystemConditions {
        SystemConditions {
            et0,
            temperature_c,
            humidity_percent,
            hour,
            power_available,
            water_level_ml,
            mode,
        }
    }

    #[test]
    fn morning_window_waters() {
        let c = scenario(4.5, 28.0, 60.0, 8, true, 3000, IrrigationMode::Normal);
        let verdict = engine().evaluate(&c);
        assert_eq!(verdict.rule_id, "optimal_window");
        assert_eq!(engine().make_decision(&c), Decision::irrigate(27));
    }

    #[test]
    fn exactly_thirty_five_falls_to_default() {
        let c = scenario(6.0, 35.0, 45.0, 14, true, 2000, IrrigationMode::Normal);
        assert_eq!(engine().evaluate(&c).rule_id, "default_threshold");
        assert_eq!(engine().make_decision(&c), Decision::irrigate(40));
    }

    #[test]
    fn battery_with_moderate_demand_skips() {
        let c = scenario(3.0, 25.0, 70.0, 18, false, 1500, IrrigationMode::Normal);
        assert_eq!(engine().evaluate(&c).rule_id, "power_conservation");
        assert_eq!(engine().make_decision(&c), Decision::skip());
    }

    #[test]
    fn heat_stress_in_extreme_mode() {
        let c = scenario(7.5, 38.0, 40.0, 12, true, 4000, IrrigationMode::Extreme);
        assert_eq!(engine().evaluate(&c).rule_id, "heat_stress");
        assert_eq!(engine().make_decision(&c), Decision::irrigate(35));
    }

    #[test]
    fn cascade_order() {
        let ids: Vec<_> = engine().list_rules().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                "low_demand",
                "water_reserve",
                "power_conservation",
                "optimal_window",
                "heat_stress",
                "extreme_mode",
                "default_threshold",
            ]
        );
    }

    #[test]
    fn low_demand_wins_over_everything() {
        let mut c = conditions(1.9);
        c.hour = 8;
        c.temperature_c = 40.0;
        assert_eq!(
            engine().evaluate(&c),
            RuleVerdict {
                rule_id: "low_demand",
                should_irrigate: false
            }
        );
    }

    #[test]
    fn reserve_floor_beats_high_demand() {
        let mut c = conditions(14.0);
        c.water_level_ml = 499;
        c.hour = 8;
        assert_eq!(engine().evaluate(&c).rule_id, "water_reserve");
        assert_eq!(engine().make_decision(&c), Decision::skip());
    }

    #[test]
    fn battery_with_severe_demand_still_waters() {
        let mut c = conditions(4.0);
        c.power_available = false;
        c.hour = 8;
        // base 20, *0.8 = 16, *1.1 = 17
        assert_eq!(engine().make_decision(&c), Decision::irrigate(17));
    }

    #[test]
    fn extreme_mode_outside_window_never_waters() {
        for et0 in [3.6, 5.1, 9.0, 14.9] {
            let mut c = conditions(et0);
            c.mode = IrrigationMode::Extreme;
            let verdict = engine().evaluate(&c);
            assert_eq!(verdict.rule_id, "extreme_mode");
            assert!(!verdict.should_irrigate);
        }
    }

    #[test]
    fn extreme_mode_inside_window_uses_window_rule() {
        let mut c = conditions(3.0);
        c.mode = IrrigationMode::Extreme;
        c.hour = 18;
        assert_eq!(engine().evaluate(&c).rule_id, "optimal_window");
        // base 10, *0.5 = 5, *1.1 = 5
        assert_eq!(engine().make_decision(&c), Decision::irrigate(5));
    }

    #[test]
    fn default_threshold_boundary() {
        assert!(!engine().should_irrigate(&conditions(3.5)));
        assert!(engine().should_irrigate(&conditions(3.6)));
    }

    #[test]
    fn duration_truncates_after_each_step() {
        let mut c = conditions(6.3);
        c.temperature_c = 36.0;
        c.mode = IrrigationMode::Conservation;
        c.power_available = false;
        c.hour = 8;
        // 43 -> 55 -> 38 -> 30 -> 33
        assert_eq!(engine().calculate_duration(&c), 33);
    }

    #[test]
    fn duration_base_truncates_float_noise() {
        // (4.6 - 2.0) * 10 is 25.999999999999996
        assert_eq!(engine().calculate_duration(&conditions(4.6)), 25);
    }

    #[test]
    fn duration_clamps_to_bounds() {
        assert_eq!(engine().calculate_duration(&conditions(2.3)), 5);
        assert_eq!(engine().calculate_duration(&conditions(9.0)), 60);

        let tight = IrrigationDecisionEngine::configure(20, 30).unwrap();
        assert_eq!(tight.calculate_duration(&conditions(3.0)), 20);
        assert_eq!(tight.calculate_duration(&conditions(8.0)), 30);
    }

    #[test]
    fn duration_below_demand_floor_clamps_to_min() {
        // Not a meaningful call, but it must still land on the bounds
        assert_eq!(engine().calculate_duration(&conditions(0.0)), 5);
    }

    #[test]
    fn conservation_scales_down() {
        let mut c = conditions(5.0);
        c.mode = IrrigationMode::Conservation;
        // base 30, *0.7 = 21
        assert_eq!(engine().make_decision(&c), Decision::irrigate(21));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            IrrigationDecisionEngine::configure(61, 60),
            Err(IrrigOpsError::MisconfiguredBounds { min: 61, max: 60 })
        ));
    }

    #[test]
    fn accepts_zero_minimum() {
        let engine = IrrigationDecisionEngine::configure(0, 60).unwrap();
        assert_eq!(engine.min_duration(), 0);

        // Smallest watering run the cascade can produce: extreme mode in a
        // window, base 5 -> 2 -> 2
        let mut c = conditions(2.51);
        c.hour = 8;
        c.mode = IrrigationMode::Extreme;
        assert_eq!(engine.make_decision(&c), Decision::irrigate(2));
        assert_eq!(engine.make_decision(&conditions(1.0)), Decision::skip());
    }

    #[test]
    fn accepts_equal_bounds() {
        let fixed = IrrigationDecisionEngine::configure(30, 30).unwrap();
        assert_eq!(fixed.make_decision(&conditions(9.0)), Decision::irrigate(30));
    }

    #[test]
    fn default_engine_matches_configured() {
        let default = IrrigationDecisionEngine::default();
        assert_eq!(default.min_duration(), 5);
        assert_eq!(default.max_duration(), 60);
        assert_eq!(default.list_rules(), engine().list_rules());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(engine());
        let c = scenario(7.5, 38.0, 40.0, 12, true, 4000, IrrigationMode::Extreme);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.make_decision(&c))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Decision::irrigate(35));
        }
    }

    fn any_mode() -> impl Strategy<Value = IrrigationMode> {
        prop_oneof![
            Just(IrrigationMode::Normal),
            Just(IrrigationMode::Conservation),
            Just(IrrigationMode::Extreme),
        ]
    }

    prop_compose! {
        fn any_conditions()(
            et0 in 0.0f64..=15.0,
            temperature_c in -10.0f64..=50.0,
            humidity_percent in 0.0f64..=100.0,
            hour in 0u8..=23,
            power_available in any::<bool>(),
            water_level_ml in 0u32..=5000,
            mode in any_mode()
        ) -> SystemConditions {
            scenario(
                et0,
                temperature_c,
                humidity_percent,
                hour,
                power_available,
                water_level_ml,
                mode,
            )
        }
    }

    proptest! {
        #[test]
        fn zero_duration_iff_skip(
            c in any_conditions(),
            min in 0u32..=30,
            span in 0u32..=120
        ) {
            let engine = IrrigationDecisionEngine::configure(min, min + span).unwrap();
            let decision = engine.make_decision(&c);
            prop_assert_eq!(decision.duration_seconds == 0, !decision.should_irrigate);
        }

        #[test]
        fn irrigation_duration_within_bounds(
            c in any_conditions(),
            min in 0u32..=30,
            span in 0u32..=120
        ) {
            let engine = IrrigationDecisionEngine::configure(min, min + span).unwrap();
            let decision = engine.make_decision(&c);
            if decision.should_irrigate {
                prop_assert!(decision.duration_seconds >= min);
                prop_assert!(decision.duration_seconds <= min + span);
            }
        }

        #[test]
        fn low_reservoir_never_waters(c in any_conditions(), level in 0u32..500) {
            let c = SystemConditions { water_level_ml: level, ..c };
            prop_assert!(!engine().should_irrigate(&c));
        }

        #[test]
        fn decisions_are_repeatable(c in any_conditions()) {
            let engine = engine();
            prop_assert_eq!(engine.make_decision(&c), engine.make_decision(&c));
        }
    }
}
