#![warn(missing_debug_implementations)]
/*!
 * # tfplot
 * _transfer function plotting_. Bode plots of rational expressions of `s`.
 *
 * tfplot evaluates transfer functions over a logarithmic frequency sweep,
 * extracts magnitude and phase, and computes the axis limits, ticks and labels
 * a renderer needs to draw the Bode plots.
 * It does not render anything itself.
 *
 * ## Get started
 *
 * ```
 * // One-shot evaluation of an expression between 0.01 and 100 Hz
 * let response = tfplot::solve("1/(s+1)", 0.01, 100.0, 500).unwrap();
 * assert_eq!(response.magnitude().len(), 500);
 *
 * // Expressions can be validated without evaluating them
 * assert!(tfplot::check_expression("(s+1)/(s^2+2*s+1)").is_ok());
 * assert!(tfplot::check_expression("(s+1").is_err());
 * ```
 *
 * Applications keep their transfer functions in a [`Manager`], which keeps
 * the responses and their product (the "total" transfer function) up to date,
 * and hand the responses to a [`plot::Plot`], which scales the axes.
 *
 * ```
 * use tfplot::axis::Side;
 * use tfplot::{Manager, Settings, TransferFunction};
 *
 * let settings = Settings::default()
 *     .with_freq_range(0.1, 1000.0)
 *     .unwrap();
 * let mut manager = Manager::new(settings);
 * manager.add(TransferFunction::new("1", "s+1")).unwrap();
 * manager.add(TransferFunction::new("10", "s+10")).unwrap();
 * assert_eq!(manager.total_expression().unwrap(), "((1)*(10))/((s+1)*(s+10))");
 *
 * let mut plot = tfplot::plot::Plot::new();
 * plot.set_logarithmic(Side::Bottom, true);
 * for response in manager.responses() {
 *     plot.add_curve(response.magnitude().clone(), Side::Left);
 * }
 * let warnings = plot.format();
 * assert!(warnings.is_empty());
 * let x_axis = plot.axis(Side::Bottom);
 * assert!(x_axis.is_logarithmic());
 * assert!((x_axis.min() - 0.1).abs() < 1e-12);
 * assert!((x_axis.max() - 1000.0).abs() < 1e-9);
 * ```
 *
 * ## Crate features
 *
 *  - `diag`: enables [`miette`](https://docs.rs/miette) diagnostics for expression errors
 *    (See [`Error::to_diagnostic`] and `tfplot_expr::diag`)
 */
// tfplot is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 RÃ©mi Thebault

use std::fmt;

pub mod axis;
pub mod bode;
pub mod data;
pub mod defaults;
pub mod manager;
pub mod plot;
pub mod settings;
pub mod sweep;

pub use axis::autoscale::{Scaled, autoscale_axis};
pub use bode::{Response, check_expression, solve};
pub use data::Dataset;
pub use manager::{Manager, TransferFunction};
pub use settings::{FreqUnit, Settings};
pub use tfplot_base::Complex;

/// Rexports of [`tfplot_expr`] items
pub mod expr {
    pub use tfplot_expr::*;
}

/// Errors returned by tfplot
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be parsed or evaluated
    Expr(tfplot_expr::Error),
    /// Frequency bounds must be finite, strictly positive and increasing
    InvalidFreqRange(f64, f64),
    /// The sweep needs at least one sample
    InvalidResolution(usize),
    /// Index and length of the indexed collection
    IndexOutOfRange(usize, usize),
    /// Expected and actual sample counts
    SampleCountMismatch(usize, usize),
    /// Error raised by the curve or transfer function at `index`
    Curve {
        /// Index of the failing item
        index: usize,
        /// The actual error
        source: Box<Error>,
    },
}

impl From<tfplot_expr::Error> for Error {
    fn from(err: tfplot_expr::Error) -> Self {
        Error::Expr(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Expr(err) => err.fmt(f),
            Error::InvalidFreqRange(min, max) => write!(
                f,
                "Invalid frequency range [{}, {}]: bounds must be strictly positive and increasing",
                min, max
            ),
            Error::InvalidResolution(res) => {
                write!(f, "Invalid resolution {}: at least one sample is required", res)
            }
            Error::IndexOutOfRange(idx, len) => {
                write!(f, "Index {} out of range (length is {})", idx, len)
            }
            Error::SampleCountMismatch(expected, actual) => write!(
                f,
                "Sample count mismatch: expected {}, got {}",
                expected, actual
            ),
            Error::Curve { index, source } => write!(f, "Curve #{}: {}", index, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Expr(err) => Some(err),
            Error::Curve { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Error {
    /// The expression error, if any, looking through [`Error::Curve`]
    pub fn expr_error(&self) -> Option<&tfplot_expr::Error> {
        match self {
            Error::Expr(err) => Some(err),
            Error::Curve { source, .. } => source.expr_error(),
            _ => None,
        }
    }

    /// Build a diagnostic pointing at the faulty part of `expression`.
    /// Returns `None` if this is not an expression error.
    #[cfg(feature = "diag")]
    pub fn to_diagnostic(&self, expression: &str) -> Option<tfplot_expr::diag::Diagnostic> {
        let err = self.expr_error()?.clone();
        Some(tfplot_expr::diag::Diagnostic::from_error(err, expression))
    }
}
