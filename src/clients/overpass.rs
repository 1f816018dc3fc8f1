use std::collections::HashMap;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::overpass;

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

/// One map feature from an Overpass answer. Nodes carry `lat`/`lon`
/// directly; ways and relations carry a `center` pair when the query asks
/// for one.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: u64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Element {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }

    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Node coordinates, or the center pair for ways and relations.
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        }
    }
}

/// Escapes a value for interpolation inside a double-quoted Overpass QL
/// string literal, so user input cannot terminate the literal and inject
/// query syntax.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Client for an Overpass API interpreter endpoint. Queries are posted as
/// a plain-text QL body.
#[derive(Clone)]
pub struct OverpassClient {
    client: Client,
    url: String,
}

impl OverpassClient {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    pub async fn run(&self, query: &str) -> Result<Vec<Element>> {
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(query.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Overpass API error: {} - {}", status, body));
        }

        let response: OverpassResponse = response.json().await?;

        Ok(response.elements)
    }

    /// QL selecting nodes with any of the given `amenity` values inside the
    /// named area. `out center;` keeps coordinates for marker placement.
    #[must_use]
    pub fn amenity_area_query(area_name: &str, amenities: &[&str]) -> String {
        let area = escape_literal(area_name);
        let mut selectors = String::new();
        for amenity in amenities {
            selectors.push_str(&format!(
                "  node[\"amenity\"=\"{amenity}\"](area.searchArea);\n"
            ));
        }

        format!(
            "[out:json][timeout:{timeout}];\n\
             area[name=\"{area}\"]->.searchArea;\n\
             (\n{selectors});\n\
             out center;",
            timeout = overpass::QUERY_TIMEOUT_SECONDS,
        )
    }

    /// QL selecting rivers and natural water features (ways and relations)
    /// inside the named area. Only tags are consumed downstream.
    #[must_use]
    pub fn water_area_query(area_name: &str) -> String {
        let area = escape_literal(area_name);
        let mut selectors = String::new();
        for kind in ["way", "relation"] {
            selectors.push_str(&format!(
                "  {kind}[\"waterway\"=\"river\"](area.searchArea);\n"
            ));
            selectors.push_str(&format!(
                "  {kind}[\"natural\"=\"water\"](area.searchArea);\n"
            ));
        }

        format!(
            "[out:json][timeout:{timeout}];\n\
             area[name=\"{area}\"]->.searchArea;\n\
             (\n{selectors});\n\
             out tags;",
            timeout = overpass::QUERY_TIMEOUT_SECONDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("Pune"), "Pune");
        assert_eq!(escape_literal(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_literal(r"a\b"), r"a\\b");
        // A closing quote plus injected filter stays inside the literal.
        assert_eq!(
            escape_literal(r#""];node["amenity"]"#),
            r#"\"];node[\"amenity\"]"#
        );
    }

    #[test]
    fn test_amenity_area_query_contains_escaped_name() {
        let query = OverpassClient::amenity_area_query(r#"Spring"field"#, &["school", "college"]);
        assert!(query.contains(r#"area[name="Spring\"field"]"#));
        assert!(query.contains(r#"node["amenity"="school"](area.searchArea);"#));
        assert!(query.contains(r#"node["amenity"="college"](area.searchArea);"#));
        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.ends_with("out center;"));
    }

    #[test]
    fn test_water_area_query_selects_ways_and_relations() {
        let query = OverpassClient::water_area_query("Pune");
        assert!(query.contains(r#"way["waterway"="river"](area.searchArea);"#));
        assert!(query.contains(r#"relation["natural"="water"](area.searchArea);"#));
        assert!(query.ends_with("out tags;"));
    }

    #[test]
    fn test_parse_elements() {
        let body = r#"{
            "version": 0.6,
            "elements": [
                {
                    "type": "node",
                    "id": 1,
                    "lat": 18.52,
                    "lon": 73.85,
                    "tags": {"amenity": "school", "name": "City School"}
                },
                {
                    "type": "way",
                    "id": 2,
                    "center": {"lat": 18.50, "lon": 73.80},
                    "tags": {"natural": "water"}
                },
                {
                    "type": "relation",
                    "id": 3
                }
            ]
        }"#;

        let parsed: OverpassResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.elements.len(), 3);

        let node = &parsed.elements[0];
        assert_eq!(node.name(), Some("City School"));
        assert_eq!(node.tag("amenity"), Some("school"));
        assert_eq!(node.position(), Some((18.52, 73.85)));

        let way = &parsed.elements[1];
        assert_eq!(way.name(), None);
        assert_eq!(way.position(), Some((18.50, 73.80)));

        let bare = &parsed.elements[2];
        assert!(bare.tags.is_empty());
        assert_eq!(bare.position(), None);
    }
}
