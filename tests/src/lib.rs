#![cfg(test)]

mod tests;

/// Sweep used by most tests: 0.01 to 100 Hz
const MIN_FREQ: f64 = 0.01;
const MAX_FREQ: f64 = 100.0;

fn near(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn near_rel(a: f64, b: f64, err: f64) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * err
}

macro_rules! assert_near {
    (abs, $a:expr, $b:expr, $tol:expr) => {
        assert!(
            $crate::near($a, $b, $tol),
            "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}",
            $a,
            $b,
            $tol
        );
    };
    (abs, $a:expr, $b:expr) => {
        assert_near!(abs, $a, $b, 1e-8);
    };
    (rel, $a:expr, $b:expr, $err:expr) => {
        assert!(
            $crate::near_rel($a, $b, $err),
            "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}",
            $a,
            $b,
            $err
        );
    };
    (rel, $a:expr, $b:expr) => {
        assert_near!(rel, $a, $b, 1e-8);
    };
}

pub(crate) use assert_near;
