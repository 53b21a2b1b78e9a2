//! Evaluation settings

use std::f64::consts::PI;
use std::fmt;

use strict_num::NonZeroPositiveF64;

use crate::{Error, defaults};

/// Unit of the frequencies shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FreqUnit {
    /// Hertz
    #[default]
    Hertz,
    /// Radians per second
    RadPerSec,
}

impl FreqUnit {
    /// Convert a frequency expressed in this unit to Hz
    pub fn to_hertz(self, freq: f64) -> f64 {
        match self {
            FreqUnit::Hertz => freq,
            FreqUnit::RadPerSec => freq / (2.0 * PI),
        }
    }

    /// Convert a frequency in Hz to this unit
    pub fn from_hertz(self, freq: f64) -> f64 {
        match self {
            FreqUnit::Hertz => freq,
            FreqUnit::RadPerSec => freq * 2.0 * PI,
        }
    }

    /// Label suitable for an axis title
    pub fn label(self) -> &'static str {
        match self {
            FreqUnit::Hertz => "Hz",
            FreqUnit::RadPerSec => "rad/s",
        }
    }
}

impl fmt::Display for FreqUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings of the frequency sweep.
///
/// The frequency range is expressed in the display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    min_freq: f64,
    max_freq: f64,
    unit: FreqUnit,
    resolution: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_freq: defaults::MIN_FREQ,
            max_freq: defaults::MAX_FREQ,
            unit: defaults::FREQ_UNIT,
            resolution: defaults::RESOLUTION,
        }
    }
}

impl Settings {
    /// Set the frequency range, in the display unit.
    /// Both bounds must be finite and strictly positive, and `min < max`.
    pub fn with_freq_range(self, min: f64, max: f64) -> Result<Self, Error> {
        let (min_freq, max_freq) = check_freq_range(min, max)?;
        Ok(Settings {
            min_freq,
            max_freq,
            ..self
        })
    }

    pub fn with_unit(self, unit: FreqUnit) -> Self {
        Settings { unit, ..self }
    }

    /// Set the number of samples of the sweep. Must not be zero.
    pub fn with_resolution(self, resolution: usize) -> Result<Self, Error> {
        if resolution == 0 {
            return Err(Error::InvalidResolution(resolution));
        }
        Ok(Settings { resolution, ..self })
    }

    pub fn min_freq(&self) -> f64 {
        self.min_freq
    }

    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    pub fn unit(&self) -> FreqUnit {
        self.unit
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Check that `min` and `max` are finite, strictly positive and increasing
pub(crate) fn check_freq_range(min: f64, max: f64) -> Result<(f64, f64), Error> {
    let (lo, hi) = check_freq_bounds(min, max)?;
    if lo >= hi {
        return Err(Error::InvalidFreqRange(min, max));
    }
    Ok((lo, hi))
}

/// Same as [`check_freq_range`] but accepts `min == max`
pub(crate) fn check_freq_bounds(min: f64, max: f64) -> Result<(f64, f64), Error> {
    let lo = NonZeroPositiveF64::new(min).filter(|f| f.get().is_finite());
    let hi = NonZeroPositiveF64::new(max).filter(|f| f.get().is_finite());
    match (lo, hi) {
        (Some(lo), Some(hi)) if lo.get() <= hi.get() => Ok((lo.get(), hi.get())),
        _ => Err(Error::InvalidFreqRange(min, max)),
    }
}
