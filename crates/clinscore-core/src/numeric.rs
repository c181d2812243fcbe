/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Logistic transform, `1 / (1 + e^-x)`.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Format with a fixed number of decimals for interpretation text.
pub fn fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}
