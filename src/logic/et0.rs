use super::calculations::{actual_vapor_pressure, saturation_vapor_pressure, vapor_pressure_slope};
use crate::error::Et0Error;
use crate::models::{SiteParameters, WeatherSample};

/// Reference evapotranspiration in mm/day, or the reason there is none
pub type Et0Result = std::result::Result<f64, Et0Error>;

pub const MIN_TEMPERATURE_C: f64 = -10.0;
pub const MAX_TEMPERATURE_C: f64 = 50.0;
pub const MAX_ET0_MM_PER_DAY: f64 = 15.0;

/// Simplified Penman-Monteith reference ET0 for one site.
///
/// Pressure and γ are derived from the altitude when the model is built and
/// never change afterwards. To move the model to another site build a new
/// one with [`ET0Model::with_site`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ET0Model {
    site: SiteParameters,
    pressure_kpa: f64,
    gamma: f64,
}

impl ET0Model {
    pub fn configure(wind_speed_ms: f64, altitude_m: f64) -> Self {
        Self::from_site(SiteParameters::new(wind_speed_ms, altitude_m))
    }

    pub fn from_site(site: SiteParameters) -> Self {
        let pressure_kpa = site.pressure();
        let gamma = site.psychrometric_constant();

        tracing::debug!(
            altitude_m = site.altitude_m,
            wind_speed_ms = site.wind_speed_ms,
            pressure_kpa,
            gamma,
            "ET0 model configured"
        );

        Self {
            site,
            pressure_kpa,
            gamma,
        }
    }

    pub fn with_site(&self, site: SiteParameters) -> Self {
        Self::from_site(site)
    }

    pub fn site(&self) -> SiteParameters {
        self.site
    }

    pub fn pressure_kpa(&self) -> f64 {
        self.pressure_kpa
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// ET0 using the site's configured wind speed
    pub fn compute(
        &self,
        temperature_c: f64,
        humidity_percent: f64,
        radiation_mj: f64,
    ) -> Et0Result {
        self.compute_with_wind(
            temperature_c,
            humidity_percent,
            radiation_mj,
            self.site.wind_speed_ms,
        )
    }

    /// ET0 for a full sample, honouring a per-sample wind speed if present
    pub fn compute_sample(&self, sample: &WeatherSample) -> Et0Result {
        self.compute_with_wind(
            sample.temperature_c,
            sample.humidity_percent,
            sample.radiation_mj,
            sample.wind_speed_ms.unwrap_or(self.site.wind_speed_ms),
        )
    }

    fn compute_with_wind(
        &self,
        temperature_c: f64,
        humidity_percent: f64,
        radiation_mj: f64,
        wind_speed_ms: f64,
    ) -> Et0Result {
        validate_inputs(temperature_c, humidity_percent, radiation_mj)?;

        let delta = vapor_pressure_slope(temperature_c);
        let es = saturation_vapor_pressure(temperature_c);
        let ea = actual_vapor_pressure(temperature_c, humidity_percent);

        let numerator = 0.408 * delta * radiation_mj
            + self.gamma * (900.0 / (temperature_c + 273.15)) * wind_speed_ms * (es - ea);
        let denominator = delta + self.gamma * (1.0 + 0.34 * wind_speed_ms);

        if denominator == 0.0 {
            return Err(Et0Error::ZeroDenominator);
        }

        let et0 = numerator / denominator;

        tracing::debug!(delta, es, ea, numerator, denominator, et0, "ET0 terms");

        if (0.0..=MAX_ET0_MM_PER_DAY).contains(&et0) {
            Ok(et0)
        } else {
            Err(Et0Error::NonPhysical(et0))
        }
    }
}

impl Default for ET0Model {
    fn default() -> Self {
        Self::from_site(SiteParameters::default())
    }
}

/// Plausibility check applied before any physics is evaluated.
/// NaN fails every range and is rejected.
pub fn validate_inputs(
    temperature_c: f64,
    humidity_percent: f64,
    radiation_mj: f64,
) -> Result<(), Et0Error> {
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temperature_c) {
        return Err(Et0Error::TemperatureOutOfRange(temperature_c));
    }
    if !(0.0..=100.0).contains(&humidity_percent) {
        return Err(Et0Error::HumidityOutOfRange(humidity_percent));
    }
    if radiation_mj.is_nan() || radiation_mj < 0.0 {
        return Err(Et0Error::RadiationOutOfRange(radiation_mj));
    }
    Ok(())
}
