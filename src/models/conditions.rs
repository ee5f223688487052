use crate::error::{IrrigOpsError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMode {
    #[default]
    Normal,
    Conservation,
    Extreme,
}

impl IrrigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMode::Normal => "normal",
            IrrigationMode::Conservation => "conservation",
            IrrigationMode::Extreme => "extreme",
        }
    }

    pub fn all() -> &'static [IrrigationMode] {
        &[
            IrrigationMode::Normal,
            IrrigationMode::Conservation,
            IrrigationMode::Extreme,
        ]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(IrrigationMode::Normal),
            "conservation" | "conserve" => Some(IrrigationMode::Conservation),
            "extreme" => Some(IrrigationMode::Extreme),
            _ => None,
        }
    }
}

impl std::fmt::Display for IrrigationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot the decision engine works from, built fresh for every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemConditions {
    /// Reference evapotranspiration, mm/day
    pub et0: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    /// Hour of day, 0-23
    pub hour: u8,
    pub power_available: bool,
    /// Reservoir level in ml
    pub water_level_ml: u32,
    #[serde(default)]
    pub mode: IrrigationMode,
}

impl SystemConditions {
    /// Reject snapshots the rule cascade cannot reason about
    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(IrrigOpsError::InvalidConditions(format!(
                "hour {} outside 0-23",
                self.hour
            )));
        }

        for (label, value) in [
            ("et0", self.et0),
            ("temperature", self.temperature_c),
            ("humidity", self.humidity_percent),
        ] {
            if !value.is_finite() {
                return Err(IrrigOpsError::InvalidConditions(format!(
                    "{} is not a finite number",
                    label
                )));
            }
        }

        Ok(())
    }
}
