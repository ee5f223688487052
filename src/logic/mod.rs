pub mod calculations;
pub mod cycle;
pub mod et0;
pub mod plausibility;
pub mod rules;

pub use cycle::{CycleContext, CycleOutcome, DecisionCycle, SkipReason};
pub use et0::{ET0Model, Et0Result};
pub use rules::{IrrigationDecisionEngine, RuleVerdict};
