//! Base library for tfplot.
//!
//! Holds the small value types shared by the expression engine
//! and the plotting core.

pub mod complex;
pub mod num;

pub use complex::Complex;
