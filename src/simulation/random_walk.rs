//! Bounded-delta random walk over a temperature/humidity pair.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Standard deviation of the Gaussian step in both dimensions.
pub const STEP_STDDEV: f64 = 0.15;

/// Magnitude bound on a single step. Only the delta is clamped; the
/// absolute values drift without bound over time.
pub const STEP_CLAMP: f64 = 0.15;

/// Mutable temperature/humidity state advanced one bounded step at a time.
///
/// Created once at process start with uniform initial values and mutated in
/// place on every sample. Nothing is persisted; a restart reseeds the walk.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    temperature: f64,
    humidity: f64,
}

impl RandomWalk {
    /// Create a walk with initial values drawn uniformly from the given
    /// `(low, high)` bounds.
    pub fn new<R: Rng>(
        rng: &mut R,
        temperature_range: (f64, f64),
        humidity_range: (f64, f64),
    ) -> Self {
        Self {
            temperature: rng.gen_range(temperature_range.0..=temperature_range.1),
            humidity: rng.gen_range(humidity_range.0..=humidity_range.1),
        }
    }

    /// Create a walk at exact values. Used for deterministic scenarios.
    pub fn with_values(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Apply one step with explicit deltas. Each delta is clamped to
    /// `[-STEP_CLAMP, STEP_CLAMP]` before being added.
    pub fn apply_step(&mut self, d_temperature: f64, d_humidity: f64) {
        self.temperature += d_temperature.clamp(-STEP_CLAMP, STEP_CLAMP);
        self.humidity += d_humidity.clamp(-STEP_CLAMP, STEP_CLAMP);
    }

    /// Advance the walk by one step with deltas drawn independently from
    /// `Normal(0, STEP_STDDEV)`.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        // STEP_STDDEV is a positive constant, so construction cannot fail
        let delta = Normal::new(0.0, STEP_STDDEV).expect("stddev is positive");
        self.apply_step(delta.sample(rng), delta.sample(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_apply_step_adds_deltas() {
        let mut walk = RandomWalk::with_values(30.0, 60.0);
        walk.apply_step(0.10, -0.05);
        assert!((walk.temperature() - 30.10).abs() < 1e-12);
        assert!((walk.humidity() - 59.95).abs() < 1e-12);
    }

    #[test]
    fn test_apply_step_clamps_large_deltas() {
        let mut walk = RandomWalk::with_values(30.0, 60.0);
        walk.apply_step(5.0, -5.0);
        assert!((walk.temperature() - 30.15).abs() < 1e-12);
        assert!((walk.humidity() - 59.85).abs() < 1e-12);
    }

    #[test]
    fn test_initial_values_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let walk = RandomWalk::new(&mut rng, (25.0, 35.0), (50.0, 85.0));
            assert!(walk.temperature() >= 25.0 && walk.temperature() <= 35.0);
            assert!(walk.humidity() >= 50.0 && walk.humidity() <= 85.0);
        }
    }

    #[test]
    fn test_step_never_exceeds_clamp() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut walk = RandomWalk::new(&mut rng, (25.0, 35.0), (50.0, 85.0));
        for _ in 0..1000 {
            let (t, h) = (walk.temperature(), walk.humidity());
            walk.step(&mut rng);
            assert!((walk.temperature() - t).abs() <= STEP_CLAMP + 1e-12);
            assert!((walk.humidity() - h).abs() <= STEP_CLAMP + 1e-12);
        }
    }

    #[test]
    fn test_same_seed_walks_identically() {
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let mut walk_a = RandomWalk::new(&mut rng_a, (25.0, 35.0), (50.0, 85.0));
        let mut walk_b = RandomWalk::new(&mut rng_b, (25.0, 35.0), (50.0, 85.0));
        for _ in 0..50 {
            walk_a.step(&mut rng_a);
            walk_b.step(&mut rng_b);
        }
        assert_eq!(walk_a.temperature(), walk_b.temperature());
        assert_eq!(walk_a.humidity(), walk_b.humidity());
    }
}
