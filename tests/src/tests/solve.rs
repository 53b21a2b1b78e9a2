use std::f64::consts::PI;

use tfplot::bode::solve_sweep;
use tfplot::sweep::Sweep;
use tfplot::{Error, FreqUnit, solve};

use crate::{MAX_FREQ, MIN_FREQ, assert_near};

const CORNER_HZ: f64 = 1.0 / (2.0 * PI);

#[test]
fn low_pass_at_corner() {
    let response = solve("1/(s+1)", CORNER_HZ, CORNER_HZ, 1).unwrap();
    assert_near!(abs, response.magnitude().y()[0], -10.0 * 2f64.log10());
    assert_near!(abs, response.phase().y()[0], -45.0);
}

#[test]
fn rad_per_sec_sweep() {
    // 1 rad/s is the corner, whatever the unit of the sweep
    let sweep = Sweep::with_unit(1.0, 1.0, FreqUnit::RadPerSec, 1).unwrap();
    let response = solve_sweep("1/(s+1)", &sweep).unwrap();
    assert_near!(rel, response.magnitude().x()[0], 1.0, 1e-12);
    assert_near!(abs, response.magnitude().y()[0], -10.0 * 2f64.log10());
    assert_near!(abs, response.phase().y()[0], -45.0);
}

#[test]
fn sweep_is_log_spaced() {
    let response = solve("s", MIN_FREQ, MAX_FREQ, 5).unwrap();
    let x = response.magnitude().x();
    let expected = [0.01, 0.1, 1.0, 10.0, 100.0];
    for (x, e) in x.iter().zip(expected) {
        assert_near!(rel, *x, e, 1e-12);
    }
    assert_eq!(response.phase().x(), x);

    let response = solve("s", 2.0, 20.0, 1).unwrap();
    assert_eq!(response.magnitude().x(), &[2.0]);
}

#[test]
fn differentiator_slope() {
    let response = solve("s", MIN_FREQ, MAX_FREQ, 5).unwrap();
    let y = response.magnitude().y();
    for w in y.windows(2) {
        assert_near!(abs, w[1] - w[0], 20.0);
    }
    for p in response.phase().y() {
        assert_near!(abs, *p, 90.0);
    }
}

#[test]
fn second_order_resonance() {
    let response = solve("1/(s^2+0.1*s+1)", CORNER_HZ, CORNER_HZ, 1).unwrap();
    assert_near!(abs, response.magnitude().y()[0], 20.0, 1e-6);
    assert_near!(abs, response.phase().y()[0], -90.0, 1e-6);
}

#[test]
fn phase_is_unwrapped() {
    let response = solve("1/(s+1)^3", MIN_FREQ, MAX_FREQ, 1000).unwrap();
    let phase = response.phase().y();
    assert!(phase[0] > -15.0);
    assert!(phase[999] < -260.0);
    for w in phase.windows(2) {
        assert!(w[1] <= w[0] + 1e-9);
        assert!(w[0] - w[1] < 5.0);
    }
}

#[test]
fn product_adds_magnitudes() {
    let a = solve("1/(s+1)", MIN_FREQ, MAX_FREQ, 100).unwrap();
    let b = solve("10/(s+10)", MIN_FREQ, MAX_FREQ, 100).unwrap();
    let ab = solve("((1)*(10))/((s+1)*(s+10))", MIN_FREQ, MAX_FREQ, 100).unwrap();
    for i in 0..100 {
        let sum = a.magnitude().y()[i] + b.magnitude().y()[i];
        assert_near!(abs, ab.magnitude().y()[i], sum, 1e-9);
        let sum = a.phase().y()[i] + b.phase().y()[i];
        assert_near!(abs, ab.phase().y()[i], sum, 1e-9);
    }
}

#[test]
fn invalid_sweeps() {
    assert_eq!(
        solve("s", 10.0, 1.0, 10).unwrap_err(),
        Error::InvalidFreqRange(10.0, 1.0)
    );
    assert!(matches!(
        solve("s", -1.0, 1.0, 10),
        Err(Error::InvalidFreqRange(..))
    ));
    assert!(matches!(
        solve("s", 1.0, f64::INFINITY, 10),
        Err(Error::InvalidFreqRange(..))
    ));
    assert_eq!(
        solve("s", 1.0, 10.0, 0).unwrap_err(),
        Error::InvalidResolution(0)
    );
}

#[test]
fn expression_errors() {
    let err = solve("(s+1", MIN_FREQ, MAX_FREQ, 10).unwrap_err();
    assert!(err.expr_error().is_some());
    assert_eq!(err.to_string(), "Imbalanced parentheses!");

    let err = solve("", MIN_FREQ, MAX_FREQ, 10).unwrap_err();
    assert_eq!(err.to_string(), "Empty expression!");
}
