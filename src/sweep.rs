//! Logarithmic frequency sweeps

use std::f64::consts::PI;

use tfplot_base::Complex;

use crate::Error;
use crate::settings::{self, FreqUnit, Settings};

/// Create a log-spaced vector of `num` elements between `start` and `end`.
/// A single element vector only contains `start`.
pub fn logspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num == 1 {
        return vec![start];
    }
    let log_start = start.log10();
    let log_span = (end / start).log10();
    let step = log_span / (num as f64 - 1.0);
    (0..num)
        .map(|i| 10f64.powf(i as f64 * step + log_start))
        .collect()
}

/// A frequency sweep and the matching samples of `s`
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    frequencies: Vec<f64>,
    samples: Vec<Complex>,
    unit: FreqUnit,
}

impl Sweep {
    /// Build a sweep of `resolution` samples between `min_hz` and `max_hz`
    pub fn new(min_hz: f64, max_hz: f64, resolution: usize) -> Result<Self, Error> {
        Self::with_unit(min_hz, max_hz, FreqUnit::Hertz, resolution)
    }

    /// Build a sweep where `min` and `max` are expressed in `unit`.
    ///
    /// The samples of `s` are always computed from frequencies in Hz,
    /// only the frequencies reported by [`Sweep::frequencies`] are in `unit`.
    pub fn with_unit(min: f64, max: f64, unit: FreqUnit, resolution: usize) -> Result<Self, Error> {
        if resolution == 0 {
            return Err(Error::InvalidResolution(resolution));
        }
        let (min, max) = settings::check_freq_bounds(min, max)?;

        let hertz = logspace(unit.to_hertz(min), unit.to_hertz(max), resolution);
        let samples = hertz
            .iter()
            .map(|f| Complex::from_imag(2.0 * PI * f))
            .collect();
        let frequencies = match unit {
            FreqUnit::Hertz => hertz,
            _ => hertz.into_iter().map(|f| unit.from_hertz(f)).collect(),
        };

        Ok(Sweep {
            frequencies,
            samples,
            unit,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        Self::with_unit(
            settings.min_freq(),
            settings.max_freq(),
            settings.unit(),
            settings.resolution(),
        )
    }

    /// Frequencies, in [`Sweep::unit`]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// The values of `s` (`j·2π·f`, with `f` in Hz)
    pub fn samples(&self) -> &[Complex] {
        &self.samples
    }

    pub fn unit(&self) -> FreqUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
