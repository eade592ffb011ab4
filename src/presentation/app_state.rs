// Application state for HTTP handlers
use crate::application::fleet_service::FleetService;
use crate::application::weather_service::WeatherService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fleet_service: Arc<FleetService>,
    pub weather_service: Arc<WeatherService>,
}
