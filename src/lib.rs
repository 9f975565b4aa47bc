//! Virtual incubator sensor array.
//!
//! This library provides the core functionality for emulating the sensor
//! array of an egg incubator: a random-walk model for temperature and
//! humidity, auxiliary motion and water-level flags, and an HTTP surface
//! that serves the readings as JSON.

pub mod config;
pub mod error;
pub mod http;
pub mod sensors;
pub mod simulation;
