//! Reading noise
//!
//! Stateless helpers; every draw comes from the generator passed in.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform draw from `[min, max)`. Returns `min` for an empty interval.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min.is_nan() || max.is_nan() || min >= max {
        return min;
    }
    Uniform::new(min, max).sample(rng)
}

/// Jitter `value` by a uniform offset within +/- `noise_percent` of itself.
///
/// With `noise_percent == 0` the value is returned untouched and no random
/// number is consumed. The result is floored at zero since it stands for a
/// physical force or mass.
pub fn apply_noise<R: Rng + ?Sized>(value: f64, noise_percent: f64, rng: &mut R) -> f64 {
    let p = noise_percent / 100.0;
    if p == 0.0 {
        return value;
    }
    let delta = (value * p).abs();
    let offset = Uniform::new_inclusive(-delta, delta).sample(rng);
    (value + offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_noise_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(apply_noise(4.905, 0.0, &mut rng), 4.905);
    }

    #[test]
    fn test_zero_noise_consumes_no_randomness() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        apply_noise(1.0, 0.0, &mut a);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_noise_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let ideal = 10.0;
        for _ in 0..1000 {
            let v = apply_noise(ideal, 5.0, &mut rng);
            assert!((9.5..=10.5).contains(&v), "reading {v} outside +/-5%");
        }
    }

    #[test]
    fn test_noise_draws_are_independent() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = apply_noise(8.829, 3.0, &mut rng);
        let b = apply_noise(8.829, 3.0, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_value_stays_non_negative() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(apply_noise(0.0, 20.0, &mut rng), 0.0);
    }

    #[test]
    fn test_random_in_range_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let mu = random_in_range(&mut rng, 0.25, 0.45);
            assert!((0.25..0.45).contains(&mu));
        }
        assert_eq!(random_in_range(&mut rng, 0.3, 0.3), 0.3);
    }
}
