use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw reading handed over by the sensor provider.
///
/// A provider that failed to read its sensors reports `valid == false`
/// and NaN measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub solar_voltage: f64,
    pub timestamp: DateTime<Utc>,
    pub valid: bool,
}

impl SensorReading {
    pub fn new(temperature_c: f64, humidity_percent: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            solar_voltage: 0.0,
            timestamp: Utc::now(),
            valid: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            temperature_c: f64::NAN,
            humidity_percent: f64::NAN,
            solar_voltage: 0.0,
            timestamp: Utc::now(),
            valid: false,
        }
    }

    pub fn with_solar_voltage(mut self, volts: f64) -> Self {
        self.solar_voltage = volts;
        self
    }
}
