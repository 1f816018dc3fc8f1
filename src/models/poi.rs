use serde::Serialize;

use super::place::Place;
use crate::clients::overpass::Element;

/// A named educational institution inside the searched area.
#[derive(Debug, Clone, Serialize)]
pub struct Institution {
    pub name: String,
    /// The matched amenity value: school, college or university.
    pub kind: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Institution {
    /// Builds a named institution; unnamed elements are dropped.
    #[must_use]
    pub fn from_element(element: &Element) -> Option<Self> {
        let name = element.name()?.to_string();
        let kind = element.tag("amenity").unwrap_or("institution").to_string();
        let position = element.position();

        Some(Self {
            name,
            kind,
            latitude: position.map(|p| p.0),
            longitude: position.map(|p| p.1),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationReport {
    /// Geocoded city center for map placement; absent when the geocoder
    /// had no match for the input.
    pub center: Option<Place>,
    pub institutions: Vec<Institution>,
}

/// A named river or water feature inside the searched area.
#[derive(Debug, Clone, Serialize)]
pub struct WaterBody {
    pub name: String,
    /// The waterway value, else the natural value.
    pub kind: String,
}

impl WaterBody {
    /// Builds a named water body; unnamed elements are dropped.
    #[must_use]
    pub fn from_element(element: &Element) -> Option<Self> {
        let name = element.name()?.to_string();
        let kind = element
            .tag("waterway")
            .or_else(|| element.tag("natural"))
            .unwrap_or("water")
            .to_string();

        Some(Self { name, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn element(tags: &[(&str, &str)]) -> Element {
        Element {
            kind: "node".to_string(),
            id: 1,
            lat: Some(18.52),
            lon: Some(73.85),
            center: None,
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_institution_requires_name() {
        let named = element(&[("amenity", "school"), ("name", "City School")]);
        let unnamed = element(&[("amenity", "school")]);

        let institution = Institution::from_element(&named).unwrap();
        assert_eq!(institution.name, "City School");
        assert_eq!(institution.kind, "school");
        assert_eq!(institution.latitude, Some(18.52));

        assert!(Institution::from_element(&unnamed).is_none());
    }

    #[test]
    fn test_water_body_kind_prefers_waterway() {
        let river = element(&[("waterway", "river"), ("name", "Mula")]);
        let lake = element(&[("natural", "water"), ("name", "Katraj Lake")]);

        assert_eq!(WaterBody::from_element(&river).unwrap().kind, "river");
        assert_eq!(WaterBody::from_element(&lake).unwrap().kind, "water");
    }
}
