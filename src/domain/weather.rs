// Normalized weather view model
use super::chart::{DailyPoint, HourlyPoint};
use serde::Serialize;

/// Everything the weather section of the dashboard needs, derived from one
/// provider fetch. Immutable once computed.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub current_temp_c: f64,
    pub condition: String,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
}
