use dotenvy::dotenv;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use website::config::AppConfig;
use website::database::ActivityDirectory;
use website::web::build_router;

const BUILD_ID: &str = env!("WEBSITE_BUILD_ID");

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let directory = ActivityDirectory::seeded();
    let app = build_router(directory, &config.static_dir);

    let listener = match config.bind_listener().await {
        Ok(l) => l,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!(build_id = BUILD_ID, "Mergington High School API on http://{}", bound),
        Err(e) => warn!(error = %e, "listening on unknown address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}
