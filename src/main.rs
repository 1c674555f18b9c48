mod config;
mod error;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use tracing::{debug, info};

use config::Config;
use state::AppState;

fn load_config() -> Result<Config> {
    // Get the executable directory to resolve relative paths correctly
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    if let Ok(path) = std::env::var("CONFIG_PATH") {
        // An explicit path must load
        let config = Config::load(&path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path, e))?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    let config_paths: Vec<String> = vec![
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
        exe_dir.join("conf.yaml").to_str().map(|s| s.to_string()),
        exe_dir.join("conf.json").to_str().map(|s| s.to_string()),
    ].into_iter().flatten().collect();

    for path in config_paths {
        if !std::path::Path::new(&path).exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                return Ok(cfg);
            }
            Err(e) => {
                debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    info!("No configuration file found, using defaults");
    Ok(Config::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("translate_backend=debug,tower_http=debug")
        .init();

    let config = load_config()?;

    // Translator is built once here and shared by all requests
    let app_state = AppState::new(config.clone())?;
    let app = routes::create_app(app_state);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
