use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

pub mod config;
pub mod error;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod signing;

use config::Config;
use signing::Signer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub signer: Signer,
    /// Komi for new games, in tenths.
    pub komi: u32,
    pub opponent: bool,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let signer = match &config.secret {
            Some(secret) => Signer::new(secret.as_bytes()),
            None => {
                tracing::warn!("GUS_SECRET not set, sessions will not survive a restart");
                Signer::random()
            }
        };
        AppState {
            signer,
            komi: config.komi,
            opponent: config.opponent,
        }
    }
}

pub fn build_router(config: &Config) -> (Router, AppState) {
    let state = AppState::from_config(config);

    let app = Router::new()
        .route("/go", post(routes::go::play))
        .route("/up", get(routes::health::health_check));

    let app = match &config.static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    (app.with_state(state.clone()), state)
}
