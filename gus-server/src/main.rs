use axum::extract::Request;
use tower::Layer as _;
use tower_http::normalize_path::NormalizePathLayer;

use gus_server::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gus_server=debug".into()),
        )
        .init();

    let config = Config::from_env();
    let (app, state) = gus_server::build_router(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        komi = state.komi,
        opponent = state.opponent,
        "Starting gus-server on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    let app = NormalizePathLayer::trim_trailing_slash().layer(app);
    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .await
    .expect("Server error");
}
