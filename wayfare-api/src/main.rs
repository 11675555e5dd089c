use wayfare_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfare_api=debug,wayfare_booking=debug,wayfare_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = wayfare_store::Config::load().expect("Failed to load config");
    let state = AppState::from_config(&config).expect("Failed to build application state");

    let addr = config.addr();
    tracing::info!("Starting Wayfare API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Failed to bind listener");
    axum::serve(listener, app(state)).await.expect("Server error");
}
