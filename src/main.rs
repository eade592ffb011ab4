// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::watch;

use crate::application::fleet_service::FleetService;
use crate::application::simulator::TelemetrySimulator;
use crate::application::weather_service::WeatherService;
use crate::infrastructure::config::{load_fleet_config, load_weather_config};
use crate::infrastructure::weather_api::WeatherApiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    current_alert, fleet_snapshot, health_check, payload_chart, speed_chart, weather,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let fleet_config = load_fleet_config()?;
    let weather_config = load_weather_config()?;

    // Create the fleet engine (application layer)
    let vehicles = fleet_config
        .vehicles
        .into_iter()
        .map(|seed| seed.into_vehicle())
        .collect();
    let simulation = fleet_config.simulation;
    let fleet_service = Arc::new(FleetService::new(
        vehicles,
        TelemetrySimulator::new(),
        simulation.speed_limit_kmh,
        Duration::from_millis(simulation.alert_lifetime_ms),
    ));

    // Weather path: provider client (infrastructure) + one-shot load.
    // Runs outside the tick loop; any failure degrades to a status message.
    let provider = Arc::new(WeatherApiClient::new(
        weather_config.weather.endpoint.clone(),
        weather_config.weather.api_key.clone(),
        weather_config.weather.forecast_days,
    ));
    let weather_service = Arc::new(WeatherService::new(provider));
    {
        let weather_service = Arc::clone(&weather_service);
        let location = weather_config.resolve_location();
        tokio::spawn(async move { weather_service.load(location).await });
    }

    // Recurring tick loop, cancelled via the shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let tick_loop = {
        let fleet_service = Arc::clone(&fleet_service);
        let interval = Duration::from_millis(simulation.tick_interval_ms);
        tokio::spawn(async move { fleet_service.run(interval, shutdown_rx).await })
    };

    // Create application state
    let state = Arc::new(AppState {
        fleet_service,
        weather_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/fleet", get(fleet_snapshot))
        .route("/alerts/current", get(current_alert))
        .route("/charts/speed", get(speed_chart))
        .route("/charts/payload", get(payload_chart))
        .route("/weather", get(weather))
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting fleet-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await?;

    // Let the tick loop finish cancelling its scheduled work
    tick_loop.await?;

    Ok(())
}

async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
    let _ = shutdown_tx.send(true);
}
