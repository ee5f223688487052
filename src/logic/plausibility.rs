use crate::models::SensorReading;
use serde::Serialize;

pub const MIN_SENSOR_TEMP_C: f64 = -20.0;
pub const MAX_SENSOR_TEMP_C: f64 = 60.0;

/// Largest believable change between consecutive readings
pub const MAX_TEMP_STEP_C: f64 = 10.0;
pub const MAX_HUMIDITY_STEP: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadingRejection {
    SensorFault,
    TemperatureImplausible { value: f64 },
    HumidityImplausible { value: f64 },
    TemperatureJump { delta: f64 },
    HumidityJump { delta: f64 },
}

impl ReadingRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingRejection::SensorFault => "Sensor fault",
            ReadingRejection::TemperatureImplausible { .. } => "Implausible temperature",
            ReadingRejection::HumidityImplausible { .. } => "Implausible humidity",
            ReadingRejection::TemperatureJump { .. } => "Temperature jump",
            ReadingRejection::HumidityJump { .. } => "Humidity jump",
        }
    }
}

impl std::fmt::Display for ReadingRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadingRejection::SensorFault => write!(f, "{}", self.as_str()),
            ReadingRejection::TemperatureImplausible { value }
            | ReadingRejection::HumidityImplausible { value } => {
                write!(f, "{}: {:.1}", self.as_str(), value)
            }
            ReadingRejection::TemperatureJump { delta }
            | ReadingRejection::HumidityJump { delta } => {
                write!(f, "{}: {:.1} since last reading", self.as_str(), delta)
            }
        }
    }
}

/// Decide whether a sensor reading may feed a decision cycle.
///
/// `previous` is the last reading the provider produced; it is only used
/// for the step checks when it was itself valid.
pub fn check_reading(
    reading: &SensorReading,
    previous: Option<&SensorReading>,
) -> Result<(), ReadingRejection> {
    if !reading.valid {
        return Err(ReadingRejection::SensorFault);
    }

    if !(MIN_SENSOR_TEMP_C..=MAX_SENSOR_TEMP_C).contains(&reading.temperature_c) {
        return Err(ReadingRejection::TemperatureImplausible {
            value: reading.temperature_c,
        });
    }
    if !(0.0..=100.0).contains(&reading.humidity_percent) {
        return Err(ReadingRejection::HumidityImplausible {
            value: reading.humidity_percent,
        });
    }

    if let Some(prev) = previous.filter(|p| p.valid) {
        let temp_delta = (reading.temperature_c - prev.temperature_c).abs();
        if temp_delta > MAX_TEMP_STEP_C {
            return Err(ReadingRejection::TemperatureJump { delta: temp_delta });
        }

        let humidity_delta = (reading.humidity_percent - prev.humidity_percent).abs();
        if humidity_delta > MAX_HUMIDITY_STEP {
            return Err(ReadingRejection::HumidityJump {
                delta: humidity_delta,
            });
        }
    }

    Ok(())
}
