//! FAO-56 style physical helpers plus the integer arithmetic used when
//! sizing an irrigation run.

/// Atmospheric pressure (kPa) at the given altitude (m)
pub fn atmospheric_pressure(altitude_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * altitude_m) / 293.0).powf(5.26)
}

/// Psychrometric constant γ (kPa/°C) for a given pressure (kPa)
pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000665 * pressure_kpa
}

/// Saturation vapour pressure es(T) in kPa
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    0.6108 * ((17.27 * temp_c) / (temp_c + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve Δ(T) in kPa/°C
pub fn vapor_pressure_slope(temp_c: f64) -> f64 {
    let es = saturation_vapor_pressure(temp_c);
    (4098.0 * es) / (temp_c + 237.3).powi(2)
}

/// Actual vapour pressure ea from temperature and relative humidity (%)
pub fn actual_vapor_pressure(temp_c: f64, humidity_percent: f64) -> f64 {
    (humidity_percent / 100.0) * saturation_vapor_pressure(temp_c)
}

/// Preferred watering windows: 07:00-09:59 and 17:00-19:59
pub fn is_optimal_time(hour: u8) -> bool {
    (7..=9).contains(&hour) || (17..=19).contains(&hour)
}

/// Scale an integer by `factor` and truncate toward zero.
///
/// Duration adjustments apply one of these per factor, in order; folding
/// them into a single float expression gives different results.
pub fn scale_truncate(value: i64, factor: f64) -> i64 {
    (value as f64 * factor) as i64
}
