//! Axis state of a Bode plot: limits, tick spacing and scale type
use std::fmt;

pub mod autoscale;
mod bounds;
pub mod ticks;

pub use autoscale::Scaled;
pub use bounds::NumBounds;

/// Side of the plot an axis is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// X axis, below the plot area
    Bottom,
    /// X axis, above the plot area. Mirrors [`Side::Bottom`].
    Top,
    /// Main Y axis
    Left,
    /// Secondary Y axis
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Bottom, Side::Top, Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Bottom | Side::Top)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Bottom => 0,
            Side::Top => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Bottom => "bottom",
            Side::Top => "top",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// The state of one axis.
///
/// `min` and `max` are the current (displayed) limits.
/// The original bounds are derived from the data and let
/// the user go back to the data extent after zooming.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub(crate) side: Side,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) major: f64,
    pub(crate) minor: f64,
    pub(crate) auto: bool,
    pub(crate) logarithmic: bool,
    pub(crate) original: NumBounds,
}

impl Axis {
    pub fn new(side: Side) -> Self {
        Axis {
            side,
            min: 0.0,
            max: 1.0,
            major: 0.1,
            minor: 0.1,
            auto: true,
            logarithmic: false,
            original: NumBounds::NAN,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn bounds(&self) -> NumBounds {
        (self.min, self.max).into()
    }

    /// Major tick spacing. 10 (one tick per decade) for logarithmic axes.
    pub fn major(&self) -> f64 {
        self.major
    }

    pub fn minor(&self) -> f64 {
        self.minor
    }

    /// Whether the limits follow the data
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn is_logarithmic(&self) -> bool {
        self.logarithmic
    }

    /// Bounds derived from the data, NaN before the first format
    pub fn original(&self) -> NumBounds {
        self.original
    }

    /// Relative position of `value` between `min` (0.0) and `max` (1.0).
    /// Renderers multiply it by the size of the plot area.
    pub fn fraction_of(&self, value: f64) -> f64 {
        if self.logarithmic {
            let start = self.min.log10();
            let end = self.max.log10();
            (value.log10() - start) / (end - start)
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }

    /// Inverse of [`Axis::fraction_of`]
    pub fn value_at(&self, fraction: f64) -> f64 {
        if self.logarithmic {
            let start = self.min.log10();
            let end = self.max.log10();
            10f64.powf(start + fraction * (end - start))
        } else {
            self.min + fraction * (self.max - self.min)
        }
    }

    pub(crate) fn apply(&mut self, scaled: &Scaled) {
        self.min = scaled.min;
        self.max = scaled.max;
        self.major = scaled.major;
        self.minor = scaled.major;
        self.logarithmic = scaled.logarithmic;
    }
}
