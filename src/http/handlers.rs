//! Route handlers for the sensor endpoints.

use crate::sensors::{SensorArray, SensorReading};
use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;
use std::sync::Arc;

const INDEX_HTML: &str = r#"<html>
    <head>
        <title>Virtual Incubator Sensor Array</title>
    </head>
    <body>
        <p>Navigate '<a href='/sensor/data'>HERE</a>' to get JSON response from the sensor array.</p>
    </body>
</html>
"#;

/// Body of `GET /sensor/data`.
///
/// The error arm mirrors the original firmware contract: a JSON error
/// payload under HTTP 200, not a distinct status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SensorDataResponse {
    Reading(SensorReading),
    Error { error: String },
}

/// GET / — landing page linking to the data endpoint.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /sensor/data — sample the array and serve the reading.
pub async fn sensor_data(State(array): State<Arc<SensorArray>>) -> Json<SensorDataResponse> {
    let reading = array.sample();
    if reading.is_valid() {
        Json(SensorDataResponse::Reading(reading))
    } else {
        Json(SensorDataResponse::Error {
            error: "Null values received".to_string(),
        })
    }
}
