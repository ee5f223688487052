use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrrigOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duration bounds misconfigured: min {min}s, max {max}s (need min <= max)")]
    MisconfiguredBounds { min: u32, max: u32 },

    #[error("Invalid site parameters: {0}")]
    InvalidSite(String),

    #[error("Invalid conditions: {0}")]
    InvalidConditions(String),

    #[error("ET0 unavailable: {0}")]
    Et0(#[from] Et0Error),
}

pub type Result<T> = std::result::Result<T, IrrigOpsError>;

/// Reasons an ET0 computation produced no usable rate.
///
/// The first three are rejected weather inputs, the last two are degenerate
/// or non-physical results of the energy balance itself.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Et0Error {
    #[error("temperature {0}°C outside [-10, 50]")]
    TemperatureOutOfRange(f64),

    #[error("relative humidity {0}% outside [0, 100]")]
    HumidityOutOfRange(f64),

    #[error("solar radiation {0} MJ/m²/day is not a non-negative value")]
    RadiationOutOfRange(f64),

    #[error("energy balance denominator is zero")]
    ZeroDenominator,

    #[error("computed ET0 {0} mm/day outside [0, 15]")]
    NonPhysical(f64),
}

impl Et0Error {
    /// True for rejected inputs, false for degenerate computations
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Et0Error::TemperatureOutOfRange(_)
                | Et0Error::HumidityOutOfRange(_)
                | Et0Error::RadiationOutOfRange(_)
        )
    }
}
