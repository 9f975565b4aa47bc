use clap::Parser;
use log::info;
use std::sync::Arc;
use tokio::time::Duration;
use virtual_incubator::config::{Config, load_dotenv};
use virtual_incubator::sensors::SensorArray;
use virtual_incubator::{http, simulation};

/// Command-line overrides for the environment-based configuration.
#[derive(Parser)]
#[command(name = "virtual-incubator")]
#[command(about = "Virtual incubator sensor array serving synthetic readings over HTTP")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind (overrides HTTP_BIND)
    #[arg(long)]
    bind: Option<String>,

    /// Fixed RNG seed for a reproducible walk (overrides SIM_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Log a sampled reading every N seconds (overrides SIM_LOG_INTERVAL_SECS)
    #[arg(long, value_name = "SECS")]
    log_interval: Option<u64>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(bind) = self.bind {
            config.http.bind = bind;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(interval) = self.log_interval {
            config.simulation.log_interval_secs = Some(interval);
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_logger();
    let cli = Cli::parse();
    info!("Starting Virtual Incubator Sensor Array");

    // Load configuration
    let mut config = Config::from_env();
    cli.apply(&mut config);
    info!("Configuration loaded:");
    info!("  Bind: {}:{}", config.http.bind, config.http.port);
    info!(
        "  Initial temperature range: [{}, {}]",
        config.simulation.temperature_range.0, config.simulation.temperature_range.1
    );
    info!(
        "  Initial humidity range: [{}, {}]",
        config.simulation.humidity_range.0, config.simulation.humidity_range.1
    );
    match config.simulation.seed {
        Some(seed) => info!("  RNG seed: {seed} (fixed)"),
        None => info!("  RNG seed: OS entropy"),
    }

    // Create the shared sensor array
    let array = Arc::new(SensorArray::new(&config.simulation));
    let (temperature, humidity) = array.climate();
    info!("Sensor array initialized: temperature={temperature:.2} humidity={humidity:.2}");

    // Optional background sampling log for development
    let log_task = config
        .simulation
        .log_interval_secs
        .map(|secs| simulation::run_sampling_log(array.clone(), Duration::from_secs(secs)));
    if log_task.is_some() {
        info!("Sampling log task started");
    }

    if let Err(e) = http::serve(&config.http, array).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }

    if let Some(task) = log_task {
        task.abort();
    }
    info!("Virtual Incubator Sensor Array stopped");
}
