use serde::Serialize;

use crate::clients::open_meteo::GeoMatch;

/// A geocoded place, used both as the weather report location and as the
/// map center of the education finder.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Canonical display label: "name, country" when the country is known.
    #[must_use]
    pub fn label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

impl From<GeoMatch> for Place {
    fn from(hit: GeoMatch) -> Self {
        Self {
            name: hit.name,
            country: hit.country,
            latitude: hit.latitude,
            longitude: hit.longitude,
        }
    }
}
