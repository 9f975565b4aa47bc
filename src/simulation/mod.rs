//! Random-walk simulation of the incubator climate.
//!
//! The walk keeps temperature and humidity moving smoothly between calls
//! instead of jumping to fresh uniform draws, which is what a real DHT11
//! inside an enclosure looks like.

pub mod random_walk;
pub mod task;

pub use random_walk::{RandomWalk, STEP_CLAMP, STEP_STDDEV};
pub use task::run_sampling_log;
