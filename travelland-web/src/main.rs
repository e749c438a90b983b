use std::net::SocketAddr;
use travelland_core::seed_sample_trips;
use travelland_store::{app_config::Config, Store};
use travelland_web::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelland_web=debug,travelland_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting TravelLand on port {}", config.server.port);

    let store = Store::connect(&config.database).await?;

    if config.seed.enabled {
        seed_sample_trips(store.trips.as_ref()).await?;
    }

    let app = app(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
