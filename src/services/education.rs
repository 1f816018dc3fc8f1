use std::sync::Arc;

use tracing::{info, warn};

use super::{LookupError, require_query};
use crate::clients::open_meteo::OpenMeteoClient;
use crate::clients::overpass::OverpassClient;
use crate::models::place::Place;
use crate::models::poi::{EducationReport, Institution};

const UNAVAILABLE: &str = "Unable to fetch data. The API might be busy or the city not found.";

const AMENITIES: &[&str] = &["school", "college", "university"];

/// City name -> optional geocode for map centering -> amenity query.
pub struct EducationService {
    open_meteo: Arc<OpenMeteoClient>,
    overpass: Arc<OverpassClient>,
}

impl EducationService {
    #[must_use]
    pub const fn new(open_meteo: Arc<OpenMeteoClient>, overpass: Arc<OverpassClient>) -> Self {
        Self { open_meteo, overpass }
    }

    pub async fn lookup(&self, city: &str) -> Result<EducationReport, LookupError> {
        let city = require_query(city, "Please enter a city name")?;

        // A geocoding miss only costs the map center; the spatial query can
        // still resolve the area by name.
        let center: Option<Place> = match self.open_meteo.geocode(city).await {
            Ok(hit) => hit.map(Place::from),
            Err(e) => {
                warn!("Geocoding for map center failed: {:#}", e);
                None
            }
        };

        let query = OverpassClient::amenity_area_query(city, AMENITIES);
        let elements = match self.overpass.run(&query).await {
            Ok(elements) => elements,
            Err(e) => {
                // The city was located, so soften the message instead of
                // blaming the input.
                if let Some(place) = &center {
                    warn!("Institution lookup failed for {}: {:#}", place.label(), e);
                    return Err(LookupError::Upstream(format!(
                        "Located {}, but institution data is unavailable right now.",
                        place.label()
                    )));
                }
                return Err(LookupError::upstream("Overpass", UNAVAILABLE, &e));
            }
        };

        let institutions: Vec<Institution> =
            elements.iter().filter_map(Institution::from_element).collect();

        if institutions.is_empty() {
            return Err(LookupError::NotFound(
                "No educational institutions found in this city.".to_string(),
            ));
        }

        info!("Found {} institutions in {city}", institutions.len());

        Ok(EducationReport {
            center,
            institutions,
        })
    }
}
