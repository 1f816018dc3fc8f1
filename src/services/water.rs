use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use super::{LookupError, require_query};
use crate::clients::overpass::OverpassClient;
use crate::models::poi::WaterBody;

const UNAVAILABLE: &str = "Unable to fetch water resources. API might be busy.";

/// City name -> waterway/natural query -> named, deduplicated features.
pub struct WaterService {
    overpass: Arc<OverpassClient>,
}

impl WaterService {
    #[must_use]
    pub const fn new(overpass: Arc<OverpassClient>) -> Self {
        Self { overpass }
    }

    pub async fn lookup(&self, city: &str) -> Result<Vec<WaterBody>, LookupError> {
        let city = require_query(city, "Please enter a city name")?;

        let query = OverpassClient::water_area_query(city);
        let elements = self
            .overpass
            .run(&query)
            .await
            .map_err(|e| LookupError::upstream("Overpass", UNAVAILABLE, &e))?;

        if elements.is_empty() {
            return Err(LookupError::NotFound(
                "No major water resources found in this area.".to_string(),
            ));
        }

        let named: Vec<WaterBody> = elements.iter().filter_map(WaterBody::from_element).collect();

        if named.is_empty() {
            return Err(LookupError::NotFound(
                "Found unnamed water bodies, but no named rivers/lakes.".to_string(),
            ));
        }

        let unique = dedup_by_name(named);

        if unique.is_empty() {
            return Err(LookupError::NotFound(
                "No named water resources found.".to_string(),
            ));
        }

        info!("Found {} named water bodies in {city}", unique.len());

        Ok(unique)
    }
}

/// First occurrence of each name wins; order is preserved.
fn dedup_by_name(bodies: Vec<WaterBody>) -> Vec<WaterBody> {
    let mut seen = HashSet::new();
    bodies
        .into_iter()
        .filter(|body| seen.insert(body.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, kind: &str) -> WaterBody {
        WaterBody {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let deduped = dedup_by_name(vec![
            body("Mula", "river"),
            body("Mutha", "river"),
            body("Mula", "water"),
            body("Katraj Lake", "water"),
            body("Mutha", "river"),
        ]);

        let names: Vec<&str> = deduped.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Mula", "Mutha", "Katraj Lake"]);
        // The surviving "Mula" entry is the first one (a river, not water).
        assert_eq!(deduped[0].kind, "river");
    }

    #[test]
    fn test_dedup_unique_names_invariant() {
        let deduped = dedup_by_name(vec![
            body("Ganga", "river"),
            body("Ganga", "river"),
            body("Ganga", "river"),
        ]);

        assert_eq!(deduped.len(), 1);
        let mut names = HashSet::new();
        assert!(deduped.iter().all(|b| names.insert(b.name.clone())));
    }
}
