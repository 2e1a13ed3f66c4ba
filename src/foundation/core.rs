pub use kurbo::Vec2;

/// Percentage at which every looping track ends.
pub const FULL_CYCLE_PCT: f64 = 100.0;

/// Decimal places kept when percentages are printed into keyframe selectors.
pub const PCT_DECIMALS: usize = 4;

/// Convert a point in time to a percentage of the loop.
///
/// `secs` is clamped into `[0, total_secs]` first, so out-of-range phases collapse onto the loop
/// bounds instead of producing offsets outside `0..=100`.
pub fn secs_to_pct(secs: f64, total_secs: f64) -> f64 {
    (secs.clamp(0.0, total_secs) / total_secs) * FULL_CYCLE_PCT
}

/// Round a percentage to the precision used in emitted selectors.
pub fn round_pct(pct: f64) -> f64 {
    let scale = 10f64.powi(PCT_DECIMALS as i32);
    (pct * scale).round() / scale
}

/// Format a percentage for a keyframe selector (`8.8889`, `0`, `100`).
pub fn format_pct(pct: f64) -> String {
    let s = format!("{:.*}", PCT_DECIMALS, pct);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a plain CSS number (opacity, scale, pixels) without trailing zeros.
pub fn format_num(v: f64) -> String {
    format_pct(v)
}

/// Clamp into `[0, 1]`, mapping NaN to zero.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
