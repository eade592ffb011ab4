// Weather service - One-shot forecast fetch and normalization.
// Failures here never touch the telemetry tick loop; they degrade to a
// textual status replacing the weather section.
use crate::domain::chart::{DailyPoint, HourlyPoint};
use crate::domain::weather::WeatherReport;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Hours of day 0 shown on the hourly chart.
const HOURLY_WINDOW: usize = 12;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// No location was supplied at startup; expected environmental
    /// condition, weather section is suppressed with a message.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    /// Network or provider failure. No automatic retry.
    #[error("forecast fetch failed: {0}")]
    FetchFailed(String),
    /// Defensive check on the provider response.
    #[error("malformed forecast: {0}")]
    MalformedForecast(String),
}

/// The subset of the provider's forecast document we read. All other
/// fields of the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDocument {
    pub location: ForecastLocation,
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: ForecastDays,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDays {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    #[serde(default)]
    pub hour: Vec<HourEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaySummary {
    pub avgtemp_c: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourEntry {
    /// Formatted as "<date> <HH:MM>" by the provider.
    pub time: String,
    pub temp_c: f64,
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastDocument, WeatherError>;
}

/// Project a forecast document into the two chart series plus the current
/// conditions card. Pure; fails whole, never with partial output.
pub fn normalize(document: &ForecastDocument) -> Result<WeatherReport, WeatherError> {
    let days = &document.forecast.forecastday;
    let first_day = days.first().ok_or_else(|| {
        WeatherError::MalformedForecast("forecast has no days".to_string())
    })?;
    if first_day.hour.is_empty() {
        return Err(WeatherError::MalformedForecast(
            "first forecast day has no hourly entries".to_string(),
        ));
    }

    let hourly = first_day
        .hour
        .iter()
        .take(HOURLY_WINDOW)
        .map(|entry| HourlyPoint {
            time: time_of_day(&entry.time).to_string(),
            temperature: entry.temp_c,
        })
        .collect();

    let daily = days
        .iter()
        .map(|day| DailyPoint {
            date: day.date.clone(),
            temperature: day.day.avgtemp_c,
        })
        .collect();

    Ok(WeatherReport {
        location_name: document.location.name.clone(),
        current_temp_c: document.current.temp_c,
        condition: document.current.condition.text.clone(),
        hourly,
        daily,
    })
}

/// Keep only the "HH:MM" component of "<date> <HH:MM>".
fn time_of_day(time: &str) -> &str {
    time.split(' ').nth(1).unwrap_or(time)
}

/// What the weather section currently shows: either a normalized report or
/// the status message that replaced it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeatherView {
    Ready { report: WeatherReport },
    Unavailable { message: String },
}

pub struct WeatherService {
    provider: Arc<dyn ForecastProvider>,
    view: RwLock<WeatherView>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            provider,
            view: RwLock::new(WeatherView::Unavailable {
                message: "Weather data not loaded yet".to_string(),
            }),
        }
    }

    /// One-shot load at startup. `location` is the geolocation collaborator's
    /// answer; any failure along the path degrades to a status message, with
    /// no retry.
    pub async fn load(&self, location: Result<(f64, f64), WeatherError>) {
        let result = match location {
            Ok((latitude, longitude)) => {
                self.provider
                    .fetch_forecast(latitude, longitude)
                    .await
                    .and_then(|document| normalize(&document))
            }
            Err(err) => Err(err),
        };

        let mut view = self.view.write().await;
        *view = match result {
            Ok(report) => {
                tracing::info!(location = %report.location_name, "weather forecast loaded");
                WeatherView::Ready { report }
            }
            Err(err) => {
                tracing::warn!(%err, "weather section suppressed");
                WeatherView::Unavailable {
                    message: err.to_string(),
                }
            }
        };
    }

    pub async fn view(&self) -> WeatherView {
        self.view.read().await.clone()
    }
}
