use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::geocode;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeoMatch>>,
}

/// One geocoder candidate. `country` is absent for some minor places.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
}

/// Client for the two Open-Meteo endpoints: place search and forecast.
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(client: Client, geocoding_url: &str, forecast_url: &str) -> Self {
        Self {
            client,
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: forecast_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves a free-text place name to its best candidate, or `None`
    /// when the geocoder has no match at all.
    pub async fn geocode(&self, place: &str) -> Result<Option<GeoMatch>> {
        let url = format!(
            "{}/search?name={}&count={}",
            self.geocoding_url,
            urlencoding::encode(place),
            geocode::RESULT_COUNT
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Geocoding API error: {} - {}", status, body));
        }

        let response: GeocodingResponse = response.json().await?;

        Ok(response.results.unwrap_or_default().into_iter().next())
    }

    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            self.forecast_url, latitude, longitude
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Forecast API error: {} - {}", status, body));
        }

        let response: ForecastResponse = response.json().await?;

        Ok(response.current_weather)
    }
}
