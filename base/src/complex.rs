/*!
 * Complex numbers.
 *
 * A minimal double precision complex type, sufficient to evaluate rational
 * expressions of `s = jω`.
 *
 * Division by zero follows IEEE semantics and yields infinities or NaN.
 * Equality is exact (no epsilon), two values that are mathematically equal
 * may compare different after arithmetic.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A complex number represented by its real and imaginary parts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// 0 + 0i
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// 1 + 0i
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// 0 + 1i
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Build a complex number from real and imaginary parts
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Build a pure real complex number
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Build a pure imaginary complex number
    pub const fn from_imag(im: f64) -> Self {
        Complex { re: 0.0, im }
    }

    /// Build a complex number from its polar length and angle (in radians)
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Complex {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// The complex conjugate
    pub const fn conj(&self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// The polar length `sqrt(re² + im²)`
    pub fn norm(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// The polar angle `atan2(im, re)`, in radians
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Raise to a real power, using the polar form
    pub fn powf(&self, power: f64) -> Self {
        let r = self.norm().powf(power);
        let theta = self.arg() * power;
        Complex::from_polar(r, theta)
    }

    /// Raise to a complex power.
    ///
    /// With `self = r∠θ` and `power = a + bi`, the result has a length of
    /// `r^a·e^(-bθ)` and an angle of `b·ln(r) + aθ`.
    pub fn powc(&self, power: Complex) -> Self {
        let r = self.norm();
        let theta = self.arg();
        let factor = r.powf(power.re) * (-power.im * theta).exp();
        let angle = power.im * r.ln() + power.re * theta;
        Complex::from_polar(factor, angle)
    }

    /// Whether both parts are neither infinite nor NaN
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{:.3} + {:.3} i", self.re, self.im)
        } else {
            write!(f, "{:.3} - {:.3} i", self.re, -self.im)
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Complex) {
        let re = self.re * rhs.re - self.im * rhs.im;
        self.im = self.re * rhs.im + self.im * rhs.re;
        self.re = re;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, rhs: Complex) {
        let den = rhs.re * rhs.re + rhs.im * rhs.im;
        let re = (self.re * rhs.re + self.im * rhs.im) / den;
        self.im = (self.im * rhs.re - self.re * rhs.im) / den;
        self.re = re;
    }
}

macro_rules! impl_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $Op for Complex {
            type Output = Complex;

            fn $op(mut self, rhs: Complex) -> Complex {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl $Op<f64> for Complex {
            type Output = Complex;

            fn $op(self, rhs: f64) -> Complex {
                $Op::$op(self, Complex::from_real(rhs))
            }
        }

        impl $Op<Complex> for f64 {
            type Output = Complex;

            fn $op(self, rhs: Complex) -> Complex {
                $Op::$op(Complex::from_real(self), rhs)
            }
        }

        impl $OpAssign<f64> for Complex {
            fn $op_assign(&mut self, rhs: f64) {
                $OpAssign::$op_assign(self, Complex::from_real(rhs));
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign);
impl_binop!(Sub, sub, SubAssign, sub_assign);
impl_binop!(Mul, mul, MulAssign, mul_assign);
impl_binop!(Div, div, DivAssign, div_assign);
