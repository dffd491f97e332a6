//! Display formatting for numbers.
//!
//! All numbers are `f64`. Whole values print without a fractional part
//! and non-finite values use the names `Infinity`, `-Infinity` and `NaN`.
//! Magnitudes of at least `1e21` or below `1e-6` switch to exponent form
//! with an explicit exponent sign (`1e+21`, `1.5e-7`).

/// Format a number the way `print` shows it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return exponent_form(n);
    }
    // `Display` for f64 already omits the fraction of whole values
    // ("3" for 3.0) and never uses exponent notation.
    n.to_string()
}

/// Shortest round-trip digits in `d.ddde±x` form.
fn exponent_form(n: f64) -> String {
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
