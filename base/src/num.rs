//! Numeric helpers shared by the expression engine and the plotting core

/// Absolute threshold below which a value is considered to be zero
pub const NEARLY_ZERO: f64 = 1.0e-12;

/// Check whether a value is within [`NEARLY_ZERO`] of zero
pub fn is_zero(value: f64) -> bool {
    value.abs() < NEARLY_ZERO
}

/// Check whether a value can be plotted (neither NaN nor infinite)
pub fn is_valid(value: f64) -> bool {
    value.is_finite()
}

/// Snap values that are within [`NEARLY_ZERO`] of zero to exactly `0.0`
pub fn snap_zero(value: f64) -> f64 {
    if is_zero(value) { 0.0 } else { value }
}
