use serde::Serialize;

use super::place::Place;

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub place: Place,
    pub temperature_c: f64,
}
