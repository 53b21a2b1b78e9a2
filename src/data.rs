//! Plot data
//!
//! A [`Dataset`] holds the x and y samples of one curve.
//! For Bode plots x is the frequency and y is either the magnitude or the phase.
use crate::Error;
use crate::axis::NumBounds;

/// Two synchronized sample vectors of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Build a dataset. Both vectors must have the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::SampleCountMismatch(x.len(), y.len()));
        }
        Ok(Dataset { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over the `(x, y)` points
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Overwrite the samples with those of `other`, which must have the same count.
    /// On error, `self` is left untouched.
    pub fn overwrite(&mut self, other: &Dataset) -> Result<(), Error> {
        if other.len() != self.len() {
            return Err(Error::SampleCountMismatch(self.len(), other.len()));
        }
        self.x.copy_from_slice(&other.x);
        self.y.copy_from_slice(&other.y);
        Ok(())
    }

    /// Bounds of the finite x values
    pub fn x_bounds(&self) -> NumBounds {
        self.x.iter().copied().collect()
    }

    /// Bounds of the finite y values
    pub fn y_bounds(&self) -> NumBounds {
        self.y.iter().copied().collect()
    }
}
