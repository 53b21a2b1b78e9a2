use tfplot::{Error, FreqUnit, Manager, Settings, TransferFunction};

use crate::{MAX_FREQ, MIN_FREQ, assert_near};

fn manager(resolution: usize) -> Manager {
    let settings = Settings::default()
        .with_freq_range(MIN_FREQ, MAX_FREQ)
        .unwrap()
        .with_resolution(resolution)
        .unwrap();
    Manager::new(settings)
}

#[test]
fn total_is_the_product() {
    let mut mgr = manager(100);
    assert!(mgr.total().is_none());
    assert_eq!(mgr.add(TransferFunction::new("1", "s+1")).unwrap(), 0);
    assert_eq!(mgr.add(TransferFunction::new("s", "s+10")).unwrap(), 1);
    assert_eq!(mgr.functions().len(), 2);

    let a = mgr.response(0).unwrap();
    let b = mgr.response(1).unwrap();
    let total = mgr.total().unwrap();
    assert_eq!(total.len(), 100);
    for i in 0..100 {
        let sum = a.magnitude().y()[i] + b.magnitude().y()[i];
        assert_near!(abs, total.magnitude().y()[i], sum, 1e-9);
    }
}

#[test]
fn failed_add_leaves_manager_untouched() {
    let mut mgr = manager(50);
    mgr.add(TransferFunction::new("1", "s+1")).unwrap();
    let total = mgr.total().cloned();

    let err = mgr.add(TransferFunction::new("1", "s+")).unwrap_err();
    assert!(err.expr_error().is_some());
    let err = mgr.add(TransferFunction::new("1", "2")).unwrap_err();
    assert!(err.expr_error().is_some());

    assert_eq!(mgr.len(), 1);
    assert_eq!(mgr.total().cloned(), total);
}

#[test]
fn batch_update_reports_first_failure() {
    let mut mgr = manager(50);
    for den in ["s+1", "s+2", "s+3"] {
        mgr.add(TransferFunction::new("1", den)).unwrap();
    }

    let err = mgr
        .update_batch([
            (0, TransferFunction::new("2", "s+1")),
            (1, TransferFunction::new("2", "s+(")),
            (2, TransferFunction::new("2", "s+3")),
            (7, TransferFunction::new("2", "s+3")),
        ])
        .unwrap_err();
    match err {
        Error::Curve { index, source } => {
            assert_eq!(index, 1);
            assert!(source.expr_error().is_some());
        }
        err => panic!("unexpected error {err:?}"),
    }

    assert_eq!(mgr.function(0).unwrap().numerator(), "2");
    assert_eq!(mgr.function(1).unwrap().numerator(), "1");
    assert_eq!(mgr.function(2).unwrap().numerator(), "2");
    assert_eq!(
        mgr.total_expression().unwrap(),
        "((2)*(1)*(2))/((s+1)*(s+2)*(s+3))"
    );
}

#[test]
fn unit_change_keeps_the_range_values() {
    let mut mgr = manager(50);
    mgr.add(TransferFunction::new("1", "s+1")).unwrap();
    let hz_first = mgr.response(0).unwrap().magnitude().y()[0];

    mgr.set_unit(FreqUnit::RadPerSec).unwrap();
    assert_eq!(mgr.settings().unit(), FreqUnit::RadPerSec);
    assert_eq!(mgr.settings().min_freq(), MIN_FREQ);

    let mag = mgr.response(0).unwrap().magnitude();
    assert_near!(rel, mag.x()[0], MIN_FREQ, 1e-12);
    assert_near!(rel, mag.x()[49], MAX_FREQ, 1e-12);
    // now sampled at 0.01 rad/s instead of 0.01 Hz
    assert_near!(abs, mag.y()[0], -10.0 * (1.0f64 + 1e-4).log10(), 1e-9);
    assert!(mag.y()[0] > hz_first);
}

#[test]
fn settings_changes() {
    let mut mgr = manager(50);
    mgr.add(TransferFunction::new("1", "s+1")).unwrap();

    assert_eq!(
        mgr.set_freq_range(10.0, 1.0).unwrap_err(),
        Error::InvalidFreqRange(10.0, 1.0)
    );
    assert_eq!(mgr.settings().max_freq(), MAX_FREQ);

    assert_eq!(
        mgr.set_resolution(0).unwrap_err(),
        Error::InvalidResolution(0)
    );
    mgr.set_resolution(20).unwrap();
    assert_eq!(mgr.response(0).unwrap().len(), 20);
    assert_eq!(mgr.total().unwrap().len(), 20);

    mgr.set_freq_range(1.0, 10.0).unwrap();
    let x = mgr.response(0).unwrap().phase().x();
    assert_near!(rel, x[0], 1.0, 1e-12);
    assert_near!(rel, x[19], 10.0, 1e-12);
}

#[test]
fn remove_and_clear() {
    let mut mgr = manager(50);
    mgr.add(TransferFunction::new("1", "s+1")).unwrap();
    mgr.add(TransferFunction::new("1", "s+2")).unwrap();

    assert_eq!(mgr.remove(2).unwrap_err(), Error::IndexOutOfRange(2, 2));
    let tf = mgr.remove(0).unwrap();
    assert_eq!(tf.denominator(), "s+1");
    assert_eq!(mgr.total_expression().unwrap(), "((1))/((s+2))");
    assert_eq!(mgr.total().unwrap(), mgr.response(0).unwrap());

    mgr.clear();
    assert!(mgr.is_empty());
    assert!(mgr.total().is_none());
    assert!(mgr.total_expression().is_none());
}
