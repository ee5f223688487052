use super::et0::ET0Model;
use super::plausibility::{check_reading, ReadingRejection};
use super::rules::{IrrigationDecisionEngine, RuleVerdict};
use crate::config::Config;
use crate::error::{Et0Error, IrrigOpsError, Result};
use crate::models::{Decision, IrrigationMode, SensorReading, SystemConditions, WeatherSample};
use serde::{Deserialize, Serialize};

/// System state merged with the weather for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleContext {
    pub hour: u8,
    pub power_available: bool,
    pub water_level_ml: u32,
    #[serde(default)]
    pub mode: IrrigationMode,
}

impl CycleContext {
    fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(IrrigOpsError::InvalidConditions(format!(
                "hour {} outside 0-23",
                self.hour
            )));
        }
        Ok(())
    }
}

/// Why a cycle produced no decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    Sensor(ReadingRejection),
    Et0(Et0Error),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Sensor(r) => write!(f, "sensor reading rejected: {}", r),
            SkipReason::Et0(e) => write!(f, "ET0 unavailable: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Cannot decide this cycle; the caller tries again next cycle
    Skipped(SkipReason),
    Decided {
        conditions: SystemConditions,
        verdict: RuleVerdict,
        decision: Decision,
    },
}

impl CycleOutcome {
    pub fn decision(&self) -> Option<Decision> {
        match self {
            CycleOutcome::Decided { decision, .. } => Some(*decision),
            CycleOutcome::Skipped(_) => None,
        }
    }
}

/// Weather in, decision out: ET0 model feeding the decision engine.
///
/// A rejected reading or an unusable ET0 skips the cycle instead of
/// falling back to a default decision.
pub struct DecisionCycle {
    model: ET0Model,
    engine: IrrigationDecisionEngine,
}

impl DecisionCycle {
    pub fn new(model: ET0Model, engine: IrrigationDecisionEngine) -> Self {
        Self { model, engine }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let model = ET0Model::from_site(config.site.parameters());
        let engine = IrrigationDecisionEngine::configure(
            config.engine.min_duration,
            config.engine.max_duration,
        )?;
        Ok(Self::new(model, engine))
    }

    pub fn model(&self) -> &ET0Model {
        &self.model
    }

    pub fn engine(&self) -> &IrrigationDecisionEngine {
        &self.engine
    }

    pub fn run(&self, weather: &WeatherSample, context: &CycleContext) -> Result<CycleOutcome> {
        context.validate()?;

        let et0 = match self.model.compute_sample(weather) {
            Ok(et0) => et0,
            Err(e) => {
                tracing::warn!("Skipping irrigation cycle: {}", e);
                return Ok(CycleOutcome::Skipped(SkipReason::Et0(e)));
            }
        };

        let conditions = SystemConditions {
            et0,
            temperature_c: weather.temperature_c,
            humidity_percent: weather.humidity_percent,
            hour: context.hour,
            power_available: context.power_available,
            water_level_ml: context.water_level_ml,
            mode: context.mode,
        };

        let verdict = self.engine.evaluate(&conditions);
        let decision = if verdict.should_irrigate {
            Decision::irrigate(self.engine.calculate_duration(&conditions))
        } else {
            Decision::skip()
        };

        tracing::info!(et0, rule = verdict.rule_id, "Decision: {}", decision);

        Ok(CycleOutcome::Decided {
            conditions,
            verdict,
            decision,
        })
    }

    /// Run a cycle from a raw sensor reading, checking it first
    pub fn run_reading(
        &self,
        reading: &SensorReading,
        previous: Option<&SensorReading>,
        radiation_mj: f64,
        context: &CycleContext,
    ) -> Result<CycleOutcome> {
        if let Err(rejection) = check_reading(reading, previous) {
            tracing::warn!("Skipping irrigation cycle: {}", rejection);
            return Ok(CycleOutcome::Skipped(SkipReason::Sensor(rejection)));
        }

        let weather = WeatherSample::new(
            reading.temperature_c,
            reading.humidity_percent,
            radiation_mj,
        );
        self.run(&weather, context)
    }
}
