//! Bode magnitude and phase of transfer functions
use std::f64::consts::PI;

use tfplot_base::Complex;

use crate::sweep::Sweep;
use crate::{Dataset, Error};

/// Magnitude in dB: `20·log10(|v|)`
pub fn to_decibels(values: &[Complex]) -> Vec<f64> {
    values.iter().map(|v| 20.0 * v.norm().log10()).collect()
}

/// Phase in degrees, unwrapped so that it is continuous along the sweep
pub fn to_phase_degrees(values: &[Complex]) -> Vec<f64> {
    let mut phase: Vec<f64> = values.iter().map(|v| v.arg()).collect();
    unwrap_phase(&mut phase);
    phase.iter().map(|p| p.to_degrees()).collect()
}

/// Remove the jumps larger than π between consecutive phase values (in radians).
///
/// A single 2π correction is applied per sample, from left to right,
/// each sample being compared to the already corrected previous one.
pub fn unwrap_phase(phase: &mut [f64]) {
    for i in 1..phase.len() {
        let delta = phase[i] - phase[i - 1];
        if delta > PI {
            phase[i] -= 2.0 * PI;
        } else if delta < -PI {
            phase[i] += 2.0 * PI;
        }
    }
}

/// Frequency response of a transfer function
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    magnitude: Dataset,
    phase: Dataset,
}

impl Response {
    /// Magnitude in dB against frequency
    pub fn magnitude(&self) -> &Dataset {
        &self.magnitude
    }

    /// Phase in degrees against frequency
    pub fn phase(&self) -> &Dataset {
        &self.phase
    }

    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Overwrite with `other`, which must have the same sample count.
    /// On error, `self` is left untouched.
    pub(crate) fn overwrite(&mut self, other: &Response) -> Result<(), Error> {
        if other.len() != self.len() {
            return Err(Error::SampleCountMismatch(self.len(), other.len()));
        }
        self.magnitude.overwrite(&other.magnitude)?;
        self.phase.overwrite(&other.phase)
    }
}

/// Check that an expression is syntactically valid, without evaluating it.
///
/// Expressions that do not depend on `s` are accepted.
pub fn check_expression(expression: &str) -> Result<(), Error> {
    tfplot_expr::check(expression)?;
    Ok(())
}

/// Evaluate `expression` over `resolution` log-spaced frequencies
/// between `min_freq` and `max_freq` (in Hz).
pub fn solve(
    expression: &str,
    min_freq: f64,
    max_freq: f64,
    resolution: usize,
) -> Result<Response, Error> {
    let sweep = Sweep::new(min_freq, max_freq, resolution)?;
    solve_sweep(expression, &sweep)
}

/// Evaluate `expression` over a prepared frequency sweep.
/// The x values of the response are the sweep frequencies, in the unit of the sweep.
pub fn solve_sweep(expression: &str, sweep: &Sweep) -> Result<Response, Error> {
    let values = tfplot_expr::evaluate(expression, sweep.samples())?;

    let freqs = sweep.frequencies();
    let magnitude = Dataset::new(freqs.to_vec(), to_decibels(&values))?;
    let phase = Dataset::new(freqs.to_vec(), to_phase_degrees(&values))?;
    Ok(Response { magnitude, phase })
}
