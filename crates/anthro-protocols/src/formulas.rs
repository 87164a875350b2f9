//! Shared numeric helpers for the protocol equations.

/// Siri (1961): body-fat percentage from body density.
///
/// ```text
/// BF% = 495 / BD - 450
/// ```
pub fn siri(body_density: f64) -> f64 {
    495.0 / body_density - 450.0
}

/// Quadratic Jackson-Pollock density form:
///
/// ```text
/// BD = c - a·S + b·S² - k·age
/// ```
pub fn quadratic_density(c: f64, a: f64, b: f64, k: f64, sum_mm: f64, age: u32) -> f64 {
    c - a * sum_mm + b * sum_mm * sum_mm - k * f64::from(age)
}

/// Logarithmic density form used by Guedes and Durnin-Womersley:
///
/// ```text
/// BD = c - m·log10(S)
/// ```
pub fn log_density(c: f64, m: f64, sum_mm: f64) -> f64 {
    c - m * sum_mm.log10()
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
