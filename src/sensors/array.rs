//! Thread-safe sensor array state.
//!
//! One instance is created at startup and shared with every request handler.
//! The walk and its RNG sit behind a single mutex so each mutation completes
//! before the next sample reads the state, even under concurrent requests.

use crate::config::SimulationConfig;
use crate::sensors::{IncubatorStatus, SensorReading};
use crate::simulation::RandomWalk;
use chrono::Local;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Timestamp layout of the original deployment, 19 characters zero-padded.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shared state of the virtual sensor array.
///
/// Can be sampled from any thread (HTTP handlers, the sampling log task).
pub struct SensorArray {
    inner: Mutex<Inner>,
}

struct Inner {
    walk: RandomWalk,
    rng: StdRng,
}

impl SensorArray {
    /// Create an array with initial values drawn from the configured ranges.
    ///
    /// Seeds from OS entropy unless the config pins a seed.
    pub fn new(config: &SimulationConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let walk = RandomWalk::new(&mut rng, config.temperature_range, config.humidity_range);
        Self::from_walk(walk, rng)
    }

    /// Create an array over an existing walk and RNG. Used for deterministic
    /// scenarios and tests.
    pub fn from_walk(walk: RandomWalk, rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(Inner { walk, rng }),
        }
    }

    /// Current temperature and humidity without advancing the walk.
    pub fn climate(&self) -> (f64, f64) {
        let inner = self.inner.lock();
        (inner.walk.temperature(), inner.walk.humidity())
    }

    /// Produce one reading: step the walk, sample the auxiliary flags and
    /// status, and stamp the wall-clock time.
    pub fn sample(&self) -> SensorReading {
        let mut inner = self.inner.lock();
        let Inner { walk, rng } = &mut *inner;
        walk.step(rng);

        SensorReading {
            temperature: walk.temperature(),
            humidity: walk.humidity(),
            motion_sensor_state: rng.gen_bool(0.5),
            water_level_sensor_state: rng.gen_bool(0.5),
            incubator_status: IncubatorStatus::sample(rng),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
