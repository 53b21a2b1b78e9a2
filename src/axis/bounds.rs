use tfplot_base::num;

/// Bounds of numeric data, or of an axis.
///
/// The default value is NaN on both ends, which means "no data".
/// Adding a sample to NaN bounds initializes them to that sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumBounds(f64, f64);

impl NumBounds {
    pub const NAN: Self = Self(f64::NAN, f64::NAN);
}

impl Default for NumBounds {
    fn default() -> Self {
        Self::NAN
    }
}

impl From<f64> for NumBounds {
    fn from(value: f64) -> Self {
        Self(value, value)
    }
}

impl From<(f64, f64)> for NumBounds {
    fn from(value: (f64, f64)) -> Self {
        Self(value.0.min(value.1), value.0.max(value.1))
    }
}

impl NumBounds {
    pub fn start(&self) -> f64 {
        self.0
    }

    pub fn end(&self) -> f64 {
        self.1
    }

    pub fn span(&self) -> f64 {
        self.1 - self.0
    }

    /// Whether both ends are finite numbers
    pub fn is_valid(&self) -> bool {
        num::is_valid(self.0) && num::is_valid(self.1)
    }

    /// Whether the span is below [`num::NEARLY_ZERO`]
    pub fn is_empty(&self) -> bool {
        num::is_zero(self.span())
    }

    pub fn contains(&self, point: f64) -> bool {
        const EPS: f64 = 1e-10;
        point >= (self.0 - EPS) && point <= (self.1 + EPS)
    }

    /// Extend the bounds to `point`. Non-finite points are ignored.
    pub fn add_sample(&mut self, point: f64) {
        if !num::is_valid(point) {
            return;
        }
        self.0 = self.0.min(point);
        self.1 = self.1.max(point);
    }

    pub fn unite_with(&mut self, bounds: &NumBounds) {
        self.0 = self.0.min(bounds.0);
        self.1 = self.1.max(bounds.1);
    }

    /// Bounds with a non-null span.
    /// See [`widen_zero_range`](super::autoscale::widen_zero_range).
    pub fn widened(&self) -> NumBounds {
        super::autoscale::widen_zero_range(self.0, self.1).into()
    }
}

impl FromIterator<f64> for NumBounds {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut bounds = NumBounds::NAN;
        for point in iter {
            bounds.add_sample(point);
        }
        bounds
    }
}

#[cfg(test)]
impl crate::tests::Near for NumBounds {
    fn near_abs(&self, other: &Self, tol: f64) -> bool {
        self.0.near_abs(&other.0, tol) && self.1.near_abs(&other.1, tol)
    }

    fn near_rel(&self, other: &Self, err: f64) -> bool {
        self.0.near_rel(&other.0, err) && self.1.near_rel(&other.1, err)
    }
}
