use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tfplot::autoscale_axis;

use crate::assert_near;

#[test]
fn fixed_point_linear() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x7f_b0de);
    for _ in 0..20_000 {
        let min = rng.random_range(-1.0..1.0) * 10f64.powf(rng.random_range(-3.0..3.0));
        let max = min + rng.random_range(0.01..20.0) * 10f64.powf(rng.random_range(-3.0..3.0));
        let max_ticks = if rng.random_bool(0.5) { 7 } else { 10 };

        let first = autoscale_axis(min, max, max_ticks, false, false);
        assert!(first.min <= min + 1e-9, "{min} -> {first:?}");
        assert!(first.max >= max - 1e-9, "{max} -> {first:?}");

        let second = autoscale_axis(first.min, first.max, max_ticks, false, true);
        assert_eq!(first, second, "[{min}, {max}] with {max_ticks} ticks");
    }
}

#[test]
fn fixed_point_log() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..5_000 {
        let min = 10f64.powf(rng.random_range(-6.0..6.0));
        let max = min * 10f64.powf(rng.random_range(0.01..6.0));

        let first = autoscale_axis(min, max, 7, true, false);
        assert!(first.logarithmic);
        assert!(first.min <= min * (1.0 + 1e-9));
        assert!(first.max >= max * (1.0 - 1e-9));

        let second = autoscale_axis(first.min, first.max, 7, true, true);
        assert_eq!(first, second);
    }
}

#[test]
fn ticks_are_multiples_of_spacing() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..5_000 {
        let min = rng.random_range(-500.0..500.0);
        let max = min + rng.random_range(0.1..300.0);
        let scaled = autoscale_axis(min, max, 10, false, false);
        let q = scaled.min / scaled.major;
        assert_near!(abs, q, q.round(), 1e-6);
        let count = (scaled.max - scaled.min) / scaled.major;
        assert!(count <= 21.0, "{count} ticks for {scaled:?}");
    }
}

#[test]
fn degenerate_range() {
    let scaled = autoscale_axis(5.0, 5.0, 7, false, false);
    assert!(scaled.min < scaled.max);
    assert!(scaled.min < 5.0 && scaled.max > 5.0);

    let scaled = autoscale_axis(0.0, 0.0, 7, false, false);
    assert_eq!((scaled.min, scaled.max), (-1.0, 1.0));
}

#[test]
fn log_floor_violation() {
    let scaled = autoscale_axis(-1.0, 10.0, 7, true, true);
    assert!(!scaled.logarithmic);
    assert!(scaled.downgraded);
    assert!(scaled.min < scaled.max);
}
