//! Background sampling log for development.
//!
//! Periodically samples the array and logs the reading, so the walk can be
//! observed without polling the HTTP endpoint.

use crate::sensors::SensorArray;
use log::info;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Spawn a task that samples the sensor array at a fixed period and logs
/// each reading.
///
/// Note that every tick advances the walk, just like an HTTP request does.
///
/// # Returns
///
/// A `JoinHandle` that can be used to abort the task.
pub fn run_sampling_log(array: Arc<SensorArray>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(period);
        loop {
            interval.tick().await;
            let reading = array.sample();
            info!(
                "[Sim] temperature={:.2} humidity={:.2} motion={} water={} status={}",
                reading.temperature,
                reading.humidity,
                reading.motion_sensor_state,
                reading.water_level_sensor_state,
                reading.incubator_status
            );
        }
    })
}
