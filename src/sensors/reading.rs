//! One synthetic reading from the sensor array.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Incubation cycle status reported alongside each reading.
///
/// Sampled uniformly and independently on every call; the status carries no
/// temporal continuity between readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IncubatorStatus {
    Active,
    Paused,
    Completed,
}

impl IncubatorStatus {
    /// Draw a status uniformly from the three variants.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3u8) {
            0 => Self::Active,
            1 => Self::Paused,
            _ => Self::Completed,
        }
    }
}

/// A single reading as served on the wire.
///
/// Field names follow the JSON contract of the original deployment, so the
/// serde rename covers the whole struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    pub motion_sensor_state: bool,
    pub water_level_sensor_state: bool,
    pub incubator_status: IncubatorStatus,
    /// Wall-clock capture time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl SensorReading {
    /// Whether both climate values are real numbers.
    ///
    /// The original firmware guard rejected null readings before
    /// serialization; non-finite floats are the closest thing this
    /// simulation can produce.
    pub fn is_valid(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&IncubatorStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&IncubatorStatus::Paused).unwrap(),
            "\"paused\""
        );
        assert_eq!(
            serde_json::to_string(&IncubatorStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_status_display_matches_wire_form() {
        assert_eq!(IncubatorStatus::Active.to_string(), "active");
        assert_eq!(IncubatorStatus::Paused.to_string(), "paused");
        assert_eq!(IncubatorStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_status_sample_stays_in_domain() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let status = IncubatorStatus::sample(&mut rng);
            assert!(matches!(
                status,
                IncubatorStatus::Active | IncubatorStatus::Paused | IncubatorStatus::Completed
            ));
        }
    }

    #[test]
    fn test_reading_serializes_documented_field_names() {
        let reading = SensorReading {
            temperature: 30.1,
            humidity: 59.95,
            motion_sensor_state: true,
            water_level_sensor_state: false,
            incubator_status: IncubatorStatus::Active,
            timestamp: "2026-08-25 12:00:00".to_string(),
        };
        let value = serde_json::to_value(&reading).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for field in [
            "temperature",
            "humidity",
            "motionSensorState",
            "waterLevelSensorState",
            "incubatorStatus",
            "timestamp",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_is_valid_rejects_non_finite() {
        let mut reading = SensorReading {
            temperature: 30.0,
            humidity: 60.0,
            motion_sensor_state: false,
            water_level_sensor_state: false,
            incubator_status: IncubatorStatus::Paused,
            timestamp: "2026-08-25 12:00:00".to_string(),
        };
        assert!(reading.is_valid());
        reading.temperature = f64::NAN;
        assert!(!reading.is_valid());
        reading.temperature = 30.0;
        reading.humidity = f64::INFINITY;
        assert!(!reading.is_valid());
    }
}
