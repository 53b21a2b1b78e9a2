//! Axis management of a Bode plot.
//!
//! A [`Plot`] holds the curves and the state of the four axes.
//! [`Plot::format`] computes the axis limits and tick spacing from the visible
//! curves and from the limits pinned by the user.
//! Drawing is left to the application, which typically uses [`crate::axis::ticks`].
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::axis::autoscale::autoscale_axis;
use crate::axis::{Axis, NumBounds, Side};
use crate::{Dataset, Error, defaults};

/// Non fatal issues raised while formatting a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The axis was logarithmic but its range is not strictly positive.
    /// It was switched to linear scale.
    LogScaleDisabled(Side),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LogScaleDisabled(side) => write!(
                f,
                "Logarithmic scale disabled on {} axis: range must be strictly positive",
                side
            ),
        }
    }
}

/// A curve of the plot, attached to one of the Y axes
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    data: Dataset,
    y_side: Side,
    visible: bool,
}

impl Curve {
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// [`Side::Left`] or [`Side::Right`]
    pub fn y_side(&self) -> Side {
        self.y_side
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The four axes of a plot, indexed by [`Side`]
#[derive(Debug, Clone, PartialEq)]
pub struct Axes([Axis; 4]);

impl Axes {
    fn new() -> Self {
        Axes(Side::ALL.map(Axis::new))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.0.iter()
    }
}

impl Index<Side> for Axes {
    type Output = Axis;

    fn index(&self, side: Side) -> &Axis {
        &self.0[side.index()]
    }
}

impl IndexMut<Side> for Axes {
    fn index_mut(&mut self, side: Side) -> &mut Axis {
        &mut self.0[side.index()]
    }
}

/// Curves and axes of a plot
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    axes: Axes,
    curves: Vec<Curve>,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

// the top axis mirrors the bottom one and is never set directly
fn settable(side: Side) -> Side {
    match side {
        Side::Top => Side::Bottom,
        side => side,
    }
}

impl Plot {
    pub fn new() -> Self {
        Plot {
            axes: Axes::new(),
            curves: Vec::new(),
        }
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axis(&self, side: Side) -> &Axis {
        &self.axes[side]
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Add a visible curve and return its index.
    /// `y_side` should be [`Side::Left`] or [`Side::Right`],
    /// horizontal sides attach the curve to the left axis.
    pub fn add_curve(&mut self, data: Dataset, y_side: Side) -> usize {
        let y_side = if y_side.is_horizontal() {
            Side::Left
        } else {
            y_side
        };
        self.curves.push(Curve {
            data,
            y_side,
            visible: true,
        });
        self.curves.len() - 1
    }

    /// Replace the data of the curve at `index`
    pub fn set_curve_data(&mut self, index: usize, data: Dataset) -> Result<(), Error> {
        self.curve_mut(index)?.data = data;
        Ok(())
    }

    pub fn remove_curve(&mut self, index: usize) -> Result<Curve, Error> {
        if index >= self.curves.len() {
            return Err(Error::IndexOutOfRange(index, self.curves.len()));
        }
        Ok(self.curves.remove(index))
    }

    /// Remove all curves. Axis settings are kept.
    pub fn clear(&mut self) {
        self.curves.clear();
    }

    /// Hidden curves are not drawn and do not contribute to the axis limits
    pub fn set_curve_visible(&mut self, index: usize, visible: bool) -> Result<(), Error> {
        self.curve_mut(index)?.visible = visible;
        Ok(())
    }

    fn curve_mut(&mut self, index: usize) -> Result<&mut Curve, Error> {
        let len = self.curves.len();
        self.curves
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange(index, len))
    }

    /// Set the lower limit of an axis.
    ///
    /// Setting back the limit the axis had after autoscaling, while the other
    /// limit is also unchanged, re-enables autoscaling and leaves the limits
    /// to the next [`Plot::format`].
    /// Otherwise the axis is pinned until [`Plot::reset_autoscale`].
    pub fn set_min(&mut self, side: Side, min: f64) {
        let axis = &mut self.axes[settable(side)];
        if axis.max == axis.original.end() && min == axis.original.start() {
            axis.auto = true;
        } else {
            axis.min = min;
            axis.auto = false;
        }
    }

    /// Set the upper limit of an axis. See [`Plot::set_min`].
    pub fn set_max(&mut self, side: Side, max: f64) {
        let axis = &mut self.axes[settable(side)];
        if axis.min == axis.original.start() && max == axis.original.end() {
            axis.auto = true;
        } else {
            axis.max = max;
            axis.auto = false;
        }
    }

    /// Pin both limits of an axis
    pub fn set_range(&mut self, side: Side, min: f64, max: f64) {
        let axis = &mut self.axes[settable(side)];
        axis.min = min;
        axis.max = max;
        axis.auto = false;
    }

    /// Let the limits of the axis follow the data again
    pub fn reset_autoscale(&mut self, side: Side) {
        self.axes[settable(side)].auto = true;
    }

    /// Let the limits of all axes follow the data again
    pub fn reset_all_autoscale(&mut self) {
        for side in [Side::Bottom, Side::Left, Side::Right] {
            self.reset_autoscale(side);
        }
    }

    /// Request a logarithmic scale.
    /// The request is dropped by [`Plot::format`] if the axis range is not strictly positive.
    pub fn set_logarithmic(&mut self, side: Side, logarithmic: bool) {
        self.axes[settable(side)].logarithmic = logarithmic;
    }

    /// Compute limits and tick spacing of the axes.
    ///
    /// Does nothing if the plot has no curve.
    pub fn format(&mut self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if self.curves.is_empty() {
            return warnings;
        }

        let (left_used, right_used) = self.set_original_bounds();

        for side in [Side::Bottom, Side::Left, Side::Right] {
            let axis = &mut self.axes[side];
            axis.original = axis.original.widened();
            if axis.auto {
                axis.min = axis.original.start();
                axis.max = axis.original.end();
            }
        }

        self.match_y_axes(left_used, right_used);

        let axes = [
            (Side::Bottom, defaults::X_MAX_TICKS),
            (Side::Left, defaults::Y_MAX_TICKS),
            (Side::Right, defaults::Y_MAX_TICKS),
        ];
        for (side, max_ticks) in axes {
            let axis = &mut self.axes[side];
            let scaled = autoscale_axis(axis.min, axis.max, max_ticks, axis.logarithmic, !axis.auto);
            if scaled.downgraded {
                log::warn!(
                    "{} axis range [{}, {}] is not strictly positive, logarithmic scale disabled",
                    side,
                    axis.min,
                    axis.max
                );
                warnings.push(Warning::LogScaleDisabled(side));
            }
            axis.apply(&scaled);
            if axis.auto {
                axis.original = NumBounds::from((scaled.min, scaled.max));
            }
        }

        let mut top = self.axes[Side::Bottom].clone();
        top.side = Side::Top;
        self.axes[Side::Top] = top;

        warnings
    }

    /// Reset the original bounds to the extent of the visible curves.
    /// Returns whether the left and right axes have visible curves.
    fn set_original_bounds(&mut self) -> (bool, bool) {
        let mut x = NumBounds::NAN;
        let mut left = NumBounds::NAN;
        let mut right = NumBounds::NAN;
        let mut left_used = false;
        let mut right_used = false;

        for curve in self.curves.iter().filter(|c| c.visible) {
            x.unite_with(&curve.data.x_bounds());
            let y = curve.data.y_bounds();
            match curve.y_side {
                Side::Right => {
                    right_used = true;
                    right.unite_with(&y);
                }
                _ => {
                    left_used = true;
                    left.unite_with(&y);
                }
            }
        }

        self.axes[Side::Bottom].original = x;
        self.axes[Side::Left].original = left;
        self.axes[Side::Right].original = right;
        (left_used, right_used)
    }

    /// An Y axis without curve copies the scale of the other one
    fn match_y_axes(&mut self, left_used: bool, right_used: bool) {
        let (from, to) = match (left_used, right_used) {
            (true, false) => (Side::Left, Side::Right),
            (false, true) => (Side::Right, Side::Left),
            _ => return,
        };
        let src = self.axes[from].clone();
        let dst = &mut self.axes[to];
        dst.logarithmic = src.logarithmic;
        dst.original = src.original;
        dst.min = src.min;
        dst.max = src.max;
    }
}
