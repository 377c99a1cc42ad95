use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::api::handlers::{
    handle_compare, handle_health, handle_models, handle_prefer, handle_rate, handle_report, handle_rounds,
    handle_summarize,
};
use crate::showdown::Showdown;

pub struct ShowdownServer {
    pub port: u16,
    pub showdown: Arc<Showdown>,
}

impl ShowdownServer {
    pub fn new(port: u16, showdown: Arc<Showdown>) -> Self {
        Self { port, showdown }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .route("/models", get(handle_models))
            .route("/summarize", post(handle_summarize))
            .route("/compare", post(handle_compare))
            .route("/rounds", get(handle_rounds))
            .route("/rounds/:id/report", get(handle_report))
            .route("/rounds/:id/ratings", post(handle_rate))
            .route("/rounds/:id/preference", post(handle_prefer))
            .with_state(self.showdown.clone())
    }

    pub async fn start(&self) -> Result<(), String> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "showdown listening");
        axum::Server::bind(&addr)
            .serve(self.router().into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}
