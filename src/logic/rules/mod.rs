pub mod demand;
pub mod engine;
pub mod extreme_mode;
pub mod heat_stress;
pub mod optimal_window;
pub mod safety;

pub use engine::{IrrigationDecisionEngine, RuleVerdict};

use crate::models::SystemConditions;

/// One step of the watering rule cascade
pub trait IrrigationRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// `Some(verdict)` if this rule decides, `None` to defer to the next rule
    fn evaluate(&self, conditions: &SystemConditions) -> Option<bool>;
}
