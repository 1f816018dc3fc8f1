//! Per-tool lookup services. Each service owns the orchestration for one
//! page of the hub: validate the input, call one or two upstream clients,
//! shape the result into a report.

pub mod education;
pub mod population;
pub mod recipe;
pub mod water;
pub mod weather;

pub use education::EducationService;
pub use population::PopulationService;
pub use recipe::RecipeService;
pub use water::WaterService;
pub use weather::WeatherService;

use thiserror::Error;
use tracing::warn;

/// Errors a lookup can end in. Every variant carries the human-readable
/// message that is shown to the user; upstream failure detail is logged at
/// construction and never surfaced.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// The upstream answered, but had nothing for this query.
    #[error("{0}")]
    NotFound(String),

    /// The upstream call failed (transport, non-2xx, malformed body).
    #[error("{0}")]
    Upstream(String),
}

impl LookupError {
    /// Logs the failure detail and wraps it in the page's static message.
    pub fn upstream(service: &'static str, message: &str, err: &anyhow::Error) -> Self {
        warn!("{} lookup failed: {:#}", service, err);
        Self::Upstream(message.to_string())
    }
}

/// Rejects empty or whitespace-only input with the page's static message,
/// before any network call is made.
pub fn require_query<'a>(input: &'a str, message: &'static str) -> Result<&'a str, LookupError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyInput(message));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_query() {
        assert_eq!(require_query("London", "msg").unwrap(), "London");
        assert_eq!(require_query("  London  ", "msg").unwrap(), "London");
        assert!(matches!(
            require_query("", "Please enter a city name"),
            Err(LookupError::EmptyInput("Please enter a city name"))
        ));
        assert!(matches!(
            require_query("   ", "msg"),
            Err(LookupError::EmptyInput("msg"))
        ));
    }
}
