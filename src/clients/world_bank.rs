use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

/// Total male population indicator series.
pub const MALE_POPULATION: &str = "SP.POP.TOTL.MA.IN";

/// Total female population indicator series.
pub const FEMALE_POPULATION: &str = "SP.POP.TOTL.FE.IN";

/// Client for the World Bank indicator API.
///
/// The API answers with a two-element pair array, `[metadata, data points]`,
/// so the body is extracted positionally rather than deserialized into a
/// struct.
#[derive(Clone)]
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the most recent data point of `indicator` for `country_code`
    /// and returns its value, or `None` when the point is absent or null.
    pub async fn most_recent_value(
        &self,
        country_code: &str,
        indicator: &str,
    ) -> Result<Option<f64>> {
        let url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page=1",
            self.base_url,
            urlencoding::encode(country_code),
            indicator
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "World Bank API error: {} - {}",
                status,
                body
            ));
        }

        let body: Value = response.json().await?;

        Ok(extract_most_recent_value(&body))
    }
}

/// Index 1 of the pair array holds the data points, index 0 of those is the
/// most recent one; `value` is null for years not yet published.
fn extract_most_recent_value(body: &Value) -> Option<f64> {
    body.get(1)?.get(0)?.get("value")?.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_most_recent_value() {
        let body: Value = serde_json::from_str(
            r#"[
                {"page": 1, "pages": 65, "per_page": 1, "total": 65},
                [
                    {
                        "indicator": {"id": "SP.POP.TOTL.MA.IN", "value": "Population, male"},
                        "country": {"id": "IN", "value": "India"},
                        "date": "2023",
                        "value": 735475346
                    }
                ]
            ]"#,
        )
        .unwrap();

        assert_eq!(extract_most_recent_value(&body), Some(735_475_346.0));
    }

    #[test]
    fn test_extract_null_value_is_missing() {
        let body: Value = serde_json::from_str(
            r#"[
                {"page": 1},
                [{"date": "2024", "value": null}]
            ]"#,
        )
        .unwrap();

        assert_eq!(extract_most_recent_value(&body), None);
    }

    #[test]
    fn test_extract_from_error_body_is_missing() {
        // Unknown country codes come back as a one-element array with an
        // error message instead of the metadata/points pair.
        let body: Value = serde_json::from_str(
            r#"[{"message": [{"id": "120", "key": "Invalid value"}]}]"#,
        )
        .unwrap();

        assert_eq!(extract_most_recent_value(&body), None);
    }

    #[test]
    fn test_extract_from_empty_points_is_missing() {
        let body: Value = serde_json::from_str(r#"[{"page": 1}, []]"#).unwrap();
        assert_eq!(extract_most_recent_value(&body), None);
    }
}
