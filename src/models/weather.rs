use crate::logic::calculations::{atmospheric_pressure, psychrometric_constant};
use serde::{Deserialize, Serialize};

/// One weather observation feeding the ET0 model.
///
/// `wind_speed` overrides the site's configured wind speed for this
/// observation only; `None` uses the site value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub radiation_mj: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_ms: Option<f64>,
}

impl WeatherSample {
    pub fn new(temperature_c: f64, humidity_percent: f64, radiation_mj: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            radiation_mj,
            wind_speed_ms: None,
        }
    }

    pub fn with_wind_speed(mut self, wind_speed_ms: f64) -> Self {
        self.wind_speed_ms = Some(wind_speed_ms);
        self
    }
}

/// Site constants for the ET0 model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteParameters {
    pub wind_speed_ms: f64,
    pub altitude_m: f64,
}

impl SiteParameters {
    pub fn new(wind_speed_ms: f64, altitude_m: f64) -> Self {
        Self {
            wind_speed_ms,
            altitude_m,
        }
    }

    /// Atmospheric pressure at this altitude, kPa
    pub fn pressure(&self) -> f64 {
        atmospheric_pressure(self.altitude_m)
    }

    /// Psychrometric constant γ at this altitude, kPa/°C
    pub fn psychrometric_constant(&self) -> f64 {
        psychrometric_constant(self.pressure())
    }
}

impl Default for SiteParameters {
    fn default() -> Self {
        Self {
            wind_speed_ms: 2.0,
            altitude_m: 0.0,
        }
    }
}
