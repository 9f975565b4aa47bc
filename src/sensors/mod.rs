//! Sensor state management for the virtual incubator.
//!
//! This module provides the single owned state object behind the HTTP
//! handlers: the random walk plus the per-call auxiliary flags, and the
//! serializable reading they produce.

pub mod array;
pub mod reading;

pub use array::SensorArray;
pub use reading::{IncubatorStatus, SensorReading};
