//! Default values used when no explicit setting is given

use crate::settings::FreqUnit;

pub use tfplot_base::num::NEARLY_ZERO;

pub const MIN_FREQ: f64 = 0.1;
pub const MAX_FREQ: f64 = 100.0;
pub const FREQ_UNIT: FreqUnit = FreqUnit::Hertz;

/// Number of samples of a frequency sweep
pub const RESOLUTION: usize = 5000;

pub const X_MAX_TICKS: u32 = 7;
pub const Y_MAX_TICKS: u32 = 10;

/// Tick spacing of logarithmic axes (one tick per decade)
pub const LOG_MAJOR: f64 = 10.0;
