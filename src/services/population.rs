use std::sync::Arc;

use tracing::info;

use super::{LookupError, require_query};
use crate::clients::world_bank::{FEMALE_POPULATION, MALE_POPULATION, WorldBankClient};
use crate::models::country::resolve_code;
use crate::models::population::PopulationReport;

const INVALID_COUNTRY: &str =
    "Invalid country name or code. Try standard codes (e.g., US, IN, JP).";

/// Country name or code -> two indicator fetches joined all-or-nothing.
pub struct PopulationService {
    world_bank: Arc<WorldBankClient>,
}

impl PopulationService {
    #[must_use]
    pub const fn new(world_bank: Arc<WorldBankClient>) -> Self {
        Self { world_bank }
    }

    pub async fn lookup(&self, country: &str) -> Result<PopulationReport, LookupError> {
        let country = require_query(country, "Please enter a country name or code")?;
        let code = resolve_code(country);

        let (male, female) = futures::try_join!(
            self.world_bank.most_recent_value(&code, MALE_POPULATION),
            self.world_bank.most_recent_value(&code, FEMALE_POPULATION),
        )
        .map_err(|e| LookupError::upstream("World Bank", INVALID_COUNTRY, &e))?;

        // The most recent point can be null even for valid countries; both
        // cases get the same message.
        let (Some(male), Some(female)) = (male, female) else {
            return Err(LookupError::NotFound(INVALID_COUNTRY.to_string()));
        };

        info!("Population for {code}: male {male}, female {female}");

        Ok(PopulationReport {
            country_code: code,
            male: male.round() as u64,
            female: female.round() as u64,
        })
    }
}
