use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
pub fn load_dotenv() {
    let env_path = Path::new(".env");
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Find the first '=' and split there
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            let mut value = line[eq_pos + 1..].trim();

            // Remove surrounding quotes if present
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = &value[1..value.len() - 1];
            }

            // Only set if not already set (env vars take precedence)
            if std::env::var(key).is_err() {
                // SAFETY: We're single-threaded at this point (called before any async runtime)
                unsafe { std::env::set_var(key, value) };
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Bounds for the initial temperature draw, in degrees Celsius.
    pub temperature_range: (f64, f64),
    /// Bounds for the initial humidity draw, in percent relative humidity.
    pub humidity_range: (f64, f64),
    /// Fixed RNG seed. Unset means seed from OS entropy on every start.
    pub seed: Option<u64>,
    /// Period of the background sampling log task. Unset disables the task.
    pub log_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                bind: "0.0.0.0".to_string(),
                port: 5000,
            },
            simulation: SimulationConfig {
                temperature_range: (25.0, 35.0),
                humidity_range: (50.0, 85.0),
                seed: None,
                log_interval_secs: None,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("HTTP_BIND") {
            config.http.bind = bind;
        }
        if let Ok(port) = std::env::var("PORT")
            && let Ok(p) = port.parse()
        {
            config.http.port = p;
        }
        if let Ok(seed) = std::env::var("SIM_SEED")
            && let Ok(s) = seed.parse()
        {
            config.simulation.seed = Some(s);
        }
        if let Ok(interval) = std::env::var("SIM_LOG_INTERVAL_SECS")
            && let Ok(i) = interval.parse()
        {
            config.simulation.log_interval_secs = Some(i);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_original_deployment() {
        let config = Config::default();
        assert_eq!(config.http.bind, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.simulation.temperature_range, (25.0, 35.0));
        assert_eq!(config.simulation.humidity_range, (50.0, 85.0));
        assert!(config.simulation.seed.is_none());
        assert!(config.simulation.log_interval_secs.is_none());
    }
}
