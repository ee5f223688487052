//! Irrigation decision core.
//!
//! [`ET0Model`] turns weather into a reference evapotranspiration rate and
//! [`IrrigationDecisionEngine`] turns that rate plus system state into a
//! bounded watering decision. [`DecisionCycle`] chains the two.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::Config;
pub use error::{Et0Error, IrrigOpsError, Result};
pub use logic::{
    CycleContext, CycleOutcome, DecisionCycle, ET0Model, Et0Result, IrrigationDecisionEngine,
    RuleVerdict, SkipReason,
};
pub use models::{
    Decision, IrrigationMode, SensorReading, SiteParameters, SystemConditions, WeatherSample,
};
