use crate::application::weather_service::WeatherError;
use crate::domain::vehicle::{Site, Vehicle};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct FleetConfig {
    #[serde(default)]
    pub simulation: SimulationSettings,
    pub vehicles: Vec<VehicleSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationSettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_speed_limit_kmh")]
    pub speed_limit_kmh: u32,
    #[serde(default = "default_alert_lifetime_ms")]
    pub alert_lifetime_ms: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            speed_limit_kmh: default_speed_limit_kmh(),
            alert_lifetime_ms: default_alert_lifetime_ms(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    3000
}

fn default_speed_limit_kmh() -> u32 {
    50
}

fn default_alert_lifetime_ms() -> u64 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct VehicleSeed {
    pub id: String,
    pub label: String,
    pub driver_name: String,
    pub cargo_kind: String,
    pub payload_tons: f64,
    pub site: SiteSeed,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSeed {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl VehicleSeed {
    pub fn into_vehicle(self) -> Vehicle {
        Vehicle::at_home(
            self.id,
            self.label,
            self.driver_name,
            self.cargo_kind,
            Site {
                name: self.site.name,
                latitude: self.site.latitude,
                longitude: self.site.longitude,
            },
            self.payload_tons,
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    pub weather: WeatherSettings,
    /// Stands in for the geolocation collaborator: read once at startup,
    /// absent means the weather section is suppressed.
    pub location: Option<LocationSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherSettings {
    pub api_key: String,
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_weather_endpoint() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_forecast_days() -> u8 {
    7
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationSettings {
    pub latitude: f64,
    pub longitude: f64,
}

impl WeatherConfig {
    /// The one-shot geolocation answer for this process.
    pub fn resolve_location(&self) -> Result<(f64, f64), WeatherError> {
        self.location
            .as_ref()
            .map(|l| (l.latitude, l.longitude))
            .ok_or_else(|| {
                WeatherError::LocationUnavailable(
                    "no [location] configured for this deployment".to_string(),
                )
            })
    }
}

pub fn load_fleet_config() -> anyhow::Result<FleetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/fleet"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_weather_config() -> anyhow::Result<WeatherConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/weather"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
