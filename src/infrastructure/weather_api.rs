// WeatherAPI forecast client
use crate::application::weather_service::{ForecastDocument, ForecastProvider, WeatherError};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    forecast_days: u8,
}

impl WeatherApiClient {
    pub fn new(endpoint: String, api_key: String, forecast_days: u8) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            forecast_days,
        }
    }

    fn build_forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast.json?key={}&q={},{}&days={}&aqi=no&alerts=no",
            self.endpoint, self.api_key, latitude, longitude, self.forecast_days
        )
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiClient {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastDocument, WeatherError> {
        let url = self.build_forecast_url(latitude, longitude);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| WeatherError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::FetchFailed(format!(
                "provider returned status {status}: {body}"
            )));
        }

        // A 200 with an undecodable body is a provider contract violation,
        // not a transport failure.
        response
            .json::<ForecastDocument>()
            .await
            .map_err(|e| WeatherError::MalformedForecast(e.to_string()))
    }
}
