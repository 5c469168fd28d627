//! Decimal rounding for money and dimension values.

/// Places kept on stored prices and dimensions.
pub const STORED_PLACES: u32 = 2;

/// Round to `places` decimal places. Exact halves round away from zero.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));

    if !factor.is_finite() {
        return value;
    }

    (value * factor).round() / factor
}

/// [`round_to`] at [`STORED_PLACES`].
#[must_use]
pub fn round_stored(value: f64) -> f64 {
    round_to(value, STORED_PLACES)
}
