//! Computation of "nice" axis limits and tick spacing

use tfplot_base::num;

use crate::defaults;

/// Limits and major tick spacing computed by [`autoscale_axis`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    pub min: f64,
    pub max: f64,
    /// Spacing between major ticks. Always 10 for logarithmic axes.
    pub major: f64,
    pub logarithmic: bool,
    /// The axis was asked to be logarithmic but its limits are not strictly
    /// positive. It was scaled linearly instead.
    pub downgraded: bool,
}

/// Give a span to a range that has none.
///
/// A null range around zero becomes `[-1, 1]`,
/// otherwise both limits are moved away by 10% of their value.
/// Other ranges are returned unchanged.
pub fn widen_zero_range(min: f64, max: f64) -> (f64, f64) {
    if !num::is_zero(max - min) {
        return (min, max);
    }
    if num::is_zero(min) {
        return (-1.0, 1.0);
    }
    let min = min - 0.1 * min;
    let max = max + 0.1 * max;
    if max < min { (max, min) } else { (min, max) }
}

/// Compute the limits and major tick spacing of an axis
/// that must show the range `[min, max]`.
///
/// Unless `force_limits` is set, limits are rounded outwards, to powers of 10
/// for logarithmic axes and to multiples of the tick spacing for linear axes.
/// Logarithmic axes that cannot show the range are scaled linearly
/// and flagged [`Scaled::downgraded`].
///
/// Feeding the result back with `force_limits` set returns the same result.
pub fn autoscale_axis(
    min: f64,
    max: f64,
    max_ticks: u32,
    logarithmic: bool,
    force_limits: bool,
) -> Scaled {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let (min, max) = widen_zero_range(min, max);

    if logarithmic {
        let (lo, hi) = round_log(min, max, force_limits);
        if lo > 0.0 && lo.is_finite() && hi.is_finite() && lo < hi {
            return Scaled {
                min: lo,
                max: hi,
                major: defaults::LOG_MAJOR,
                logarithmic: true,
                downgraded: false,
            };
        }
    }

    let (min, max, major) = scale_linear(min, max, max_ticks.max(1), force_limits);
    Scaled {
        min,
        max,
        major,
        logarithmic: false,
        downgraded: logarithmic,
    }
}

fn round_log(min: f64, max: f64, force: bool) -> (f64, f64) {
    if !force {
        (decade_below(min), decade_above(max))
    } else {
        let min = if min <= 0.0 { decade_below(min) } else { min };
        let max = if max <= 0.0 { decade_above(max) } else { max };
        (min, max)
    }
}

// exact decades are kept as they are
fn decade_below(value: f64) -> f64 {
    if !(value > 0.0) {
        return f64::NAN;
    }
    10f64.powi((value.log10() + EDGE_TOL).floor() as i32)
}

fn decade_above(value: f64) -> f64 {
    if !(value > 0.0) {
        return f64::NAN;
    }
    10f64.powi((value.log10() - EDGE_TOL).ceil() as i32)
}

// Rounding to a new spacing can make the rounded range need yet another spacing.
// Passes are limited as the spacing can oscillate between two values.
const MAX_ROUNDING_PASSES: usize = 4;

fn scale_linear(min: f64, max: f64, max_ticks: u32, force: bool) -> (f64, f64, f64) {
    if !num::is_valid(min) || !num::is_valid(max) {
        return scale_linear(-1.0, 1.0, max_ticks, force);
    }

    let mut spacing = linear_spacing(max - min, max_ticks);
    let (mut lo, mut hi) = (min, max);
    if !force {
        (lo, hi) = round_to_spacing(min, max, spacing);
        for _ in 0..MAX_ROUNDING_PASSES {
            let next = linear_spacing(hi - lo, max_ticks);
            if is_close(next / spacing, 1.0) {
                break;
            }
            spacing = next;
            (lo, hi) = round_to_spacing(min, max, spacing);
        }
    }

    let lo = num::snap_zero(lo);
    let hi = num::snap_zero(hi);
    // finite limits can still have a span that overflows
    let major = linear_spacing(hi - lo, max_ticks);
    if num::is_zero(hi - lo) || !num::is_valid(lo) || !num::is_valid(hi) || !is_spacing(major) {
        return scale_linear(-1.0, 1.0, max_ticks, force);
    }
    // spacing matches the final limits, which makes forced limits a fixed point
    (lo, hi, major)
}

fn is_spacing(value: f64) -> bool {
    num::is_valid(value) && value > 0.0
}

/// Tick spacing in the 1, 2, 5 series that gives at most about `max_ticks` ticks
fn linear_spacing(range: f64, max_ticks: u32) -> f64 {
    let oom = range.log10().floor() as i32;
    let scale = 10f64.powi(oom - 1);
    let raw = range / max_ticks as f64;

    let normalized = match raw / scale {
        n if n > 5.0 => 10.0,
        n if n > 2.0 => 5.0,
        n if n > 1.0 => 2.0,
        n if n > 0.5 => 1.0,
        n if n > 0.2 => 0.5,
        n if n > 0.1 => 0.2,
        _ => 0.1,
    };
    normalized * scale
}

fn round_to_spacing(min: f64, max: f64, spacing: f64) -> (f64, f64) {
    let edge = EdgeInteger { step: spacing };
    (
        edge.largest_le(min) * spacing,
        edge.smallest_ge(max) * spacing,
    )
}

const EDGE_TOL: f64 = 1e-10;

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < EDGE_TOL
}

/// Integer multiples of a step, tolerant to values that are
/// already a multiple up to floating point errors
struct EdgeInteger {
    step: f64,
}

impl EdgeInteger {
    fn largest_le(&self, value: f64) -> f64 {
        let q = value / self.step;
        let r = q.round();
        if is_close(q, r) { r } else { q.floor() }
    }

    fn smallest_ge(&self, value: f64) -> f64 {
        let q = value / self.step;
        let r = q.round();
        if is_close(q, r) { r } else { q.ceil() }
    }
}
