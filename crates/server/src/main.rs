use std::sync::Arc;
use std::time::Duration;

use detection::{OrtDetector, YoloModel};
use server::{config::ServerConfig, routes::run_server, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    common::setup_logging(config.environment);

    tracing::info!(config = ?config, "Loaded configuration");

    tracing::info!("Loading detection model");
    let model = YoloModel::load(
        &config.model_path,
        config.device,
        config.model_input_size,
        config.inference_params(),
    )?;
    let detector = Arc::new(OrtDetector::new(model));

    let mut http = reqwest::Client::builder();
    if config.accept_invalid_certs {
        http = http.danger_accept_invalid_certs(true);
    }
    if let Some(secs) = config.fetch_timeout_secs {
        http = http.timeout(Duration::from_secs(secs));
    }
    let http = http.build()?;

    let state = AppState::new(detector, http);
    run_server(&config.bind_addr, state).await
}
