//! Bounded random walk shared by every simulated field

use portwatch_logic::bounded::Bounded;
use rand::Rng;

/// Replace `v` with `clamp(v + uniform(-step, step), min, max)`.
///
/// A zero step leaves the field untouched.
pub fn random_walk<R: Rng + ?Sized>(field: &mut Bounded, step: f32, rng: &mut R) {
    if step <= 0.0 || !step.is_finite() {
        return;
    }
    let delta = rng.gen_range(-step..=step);
    field.nudge(delta);
}

/// Uniform draw from `[min, max]`, collapsing to `min` for an empty window.
pub fn uniform_in<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portwatch_logic::bounded::FieldRange;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_step_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut v = Bounded::new(42.0, FieldRange::new(0.0, 100.0));
        for _ in 0..50 {
            random_walk(&mut v, 0.0, &mut rng);
        }
        assert_eq!(v.value(), 42.0);
    }

    #[test]
    fn test_walk_moves_at_most_step() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut v = Bounded::new(50.0, FieldRange::new(0.0, 100.0));
        for _ in 0..200 {
            let before = v.value();
            random_walk(&mut v, 3.0, &mut rng);
            assert!((v.value() - before).abs() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_uniform_in_degenerate_window() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(uniform_in(6.0, 6.0, &mut rng), 6.0);
        let v = uniform_in(6.0, 10.0, &mut rng);
        assert!((6.0..=10.0).contains(&v));
    }

    proptest! {
        #[test]
        fn walk_never_leaves_range(
            seed in any::<u64>(),
            min in -500.0f32..500.0,
            width in 0.0f32..1000.0,
            start in -2000.0f32..2000.0,
            step in 0.0f32..100.0,
            ticks in 1usize..500,
        ) {
            let range = FieldRange::new(min, min + width);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut v = Bounded::new(start, range);
            prop_assert!(range.contains(v.value()));
            for _ in 0..ticks {
                random_walk(&mut v, step, &mut rng);
                prop_assert!(range.contains(v.value()), "{} escaped {:?}", v.value(), range);
            }
        }
    }
}
