use std::sync::Arc;

use tracing::info;

use super::{LookupError, require_query};
use crate::clients::open_meteo::OpenMeteoClient;
use crate::models::place::Place;
use crate::models::weather::WeatherReport;

const UNAVAILABLE: &str = "Unable to fetch temperature. Please check the city name.";

/// City name -> geocode -> current temperature.
pub struct WeatherService {
    open_meteo: Arc<OpenMeteoClient>,
}

impl WeatherService {
    #[must_use]
    pub const fn new(open_meteo: Arc<OpenMeteoClient>) -> Self {
        Self { open_meteo }
    }

    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let city = require_query(city, "Please enter a city name")?;

        let hit = self
            .open_meteo
            .geocode(city)
            .await
            .map_err(|e| LookupError::upstream("Open-Meteo", UNAVAILABLE, &e))?
            .ok_or_else(|| {
                LookupError::NotFound(format!("City not found: {city}. Please check the name."))
            })?;

        let place = Place::from(hit);

        let weather = self
            .open_meteo
            .current_weather(place.latitude, place.longitude)
            .await
            .map_err(|e| LookupError::upstream("Open-Meteo", UNAVAILABLE, &e))?;

        info!(
            "Weather for {}: {} °C",
            place.label(),
            weather.temperature
        );

        Ok(WeatherReport {
            place,
            temperature_c: weather.temperature,
        })
    }
}
