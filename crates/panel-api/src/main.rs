//! Admin panel API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p panel-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use panel_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the environment picks the log format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing_with_config(&TracingConfig::for_environment(
                Environment::Development,
            ));
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting admin panel API server"
    );

    if let Err(e) = panel_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
