use std::sync::Arc;

use summarizer_showdown::api::server::ShowdownServer;
use summarizer_showdown::helpers::build_showdown;
use summarizer_showdown::ShowdownConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ShowdownConfig::from_env();
    let port = config.port;
    let showdown = match build_showdown(config) {
        Ok(showdown) => Arc::new(showdown),
        Err(err) => {
            error!("startup failed: {}", err);
            std::process::exit(1);
        }
    };

    let server = ShowdownServer::new(port, showdown);
    if let Err(err) = server.start().await {
        error!("server error: {}", err);
    }
}
