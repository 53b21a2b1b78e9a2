//! Tick locations and labels of a formatted axis.
//!
//! Everything here works on an [`Axis`] that was scaled by
//! [`Plot::format`](crate::plot::Plot::format). Renderers map the returned
//! values with [`Axis::fraction_of`].
use std::fmt::Debug;
use std::sync::Arc;

use super::Axis;

const EPS: f64 = 1e-10;

/// Values of the major ticks, `min` and `max` included when they fall on a tick.
///
/// Linear axes have a tick at `min + k·major`.
/// Logarithmic axes have a tick at every decade between `min` and `max`.
pub fn major_ticks(axis: &Axis) -> Vec<f64> {
    if !axis_is_valid(axis) {
        return Vec::new();
    }
    if axis.is_logarithmic() {
        decades(axis.min(), axis.max())
            .map(|exp| 10f64.powi(exp))
            .collect()
    } else {
        linear_ticks(axis.min(), axis.max(), axis.major())
    }
}

/// Values of the minor ticks, also used for grid lines.
///
/// Logarithmic axes have a tick at `m·10^n` for `m` in `1..=9`.
pub fn minor_ticks(axis: &Axis) -> Vec<f64> {
    if !axis_is_valid(axis) {
        return Vec::new();
    }
    if !axis.is_logarithmic() {
        return linear_ticks(axis.min(), axis.max(), axis.minor());
    }

    let (min, max) = (axis.min(), axis.max());
    let first = min.log10().floor() as i32;
    let last = max.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exp in first..=last {
        let decade = 10f64.powi(exp);
        for m in 1..=9 {
            let tick = m as f64 * decade;
            if tick >= min * (1.0 - EPS) && tick <= max * (1.0 + EPS) {
                ticks.push(tick);
            }
        }
    }
    ticks
}

fn axis_is_valid(axis: &Axis) -> bool {
    let (min, max) = (axis.min(), axis.max());
    if !min.is_finite() || !max.is_finite() || min >= max {
        return false;
    }
    if axis.is_logarithmic() {
        min > 0.0
    } else {
        axis.major() > 0.0 && axis.minor() > 0.0
    }
}

fn decades(min: f64, max: f64) -> impl Iterator<Item = i32> {
    let first = (min.log10() - EPS).ceil() as i32;
    let last = (max.log10() + EPS).floor() as i32;
    first..=last
}

fn linear_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let count = ((max - min) / step + EPS).floor();
    if !count.is_finite() {
        return Vec::new();
    }
    let count = count as usize;
    (0..=count).map(|k| min + k as f64 * step).collect()
}

/// Formats tick values into labels
pub trait LabelFormatter: Debug + Send + Sync {
    fn format_label(&self, value: f64) -> String;
}

/// Fixed point notation with the given number of decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecLabelFormat(pub usize);

impl LabelFormatter for PrecLabelFormat {
    fn format_label(&self, value: f64) -> String {
        format!("{value:.*}", self.0)
    }
}

/// `10^n` labels for exact decades, and no label for other values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeLabelFormat;

impl LabelFormatter for DecadeLabelFormat {
    fn format_label(&self, value: f64) -> String {
        if !(value > 0.0) {
            return String::new();
        }
        let exp = value.log10();
        if (exp - exp.round()).abs() < EPS {
            format!("10^{}", exp.round() as i32)
        } else {
            String::new()
        }
    }
}

/// Number of decimals needed to tell apart adjacent ticks spaced by `major`,
/// plus two
pub fn label_precision(major: f64) -> usize {
    let exp = major.log10();
    if exp >= 0.0 || !exp.is_finite() {
        2
    } else {
        2 + (1.0 - exp) as usize
    }
}

/// The label formatter suited to the axis
pub fn label_formatter(axis: &Axis) -> Arc<dyn LabelFormatter> {
    if axis.is_logarithmic() {
        Arc::new(DecadeLabelFormat)
    } else {
        Arc::new(PrecLabelFormat(label_precision(axis.major())))
    }
}

/// Major ticks together with their label.
/// Ticks without label (off-decade values of logarithmic axes) are skipped.
pub fn major_labels(axis: &Axis) -> Vec<(f64, String)> {
    let fmt = label_formatter(axis);
    major_ticks(axis)
        .into_iter()
        .map(|tick| (tick, fmt.format_label(tick)))
        .filter(|(_, lbl)| !lbl.is_empty())
        .collect()
}
