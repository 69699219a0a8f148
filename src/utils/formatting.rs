//! Number formatting shared by the report and the exporters.

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// e.g. 545.0 → "09h 05m", 3.5 → "00h 03m"
pub fn mins2readable(mins: f64) -> String {
    let total = mins.abs().floor() as i64;
    let sign = if mins < 0.0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, total / 60, total % 60)
}
