use std::sync::Arc;

use crate::clients::mealdb::MealDbClient;
use crate::clients::open_meteo::OpenMeteoClient;
use crate::clients::overpass::OverpassClient;
use crate::clients::world_bank::WorldBankClient;
use crate::config::Config;
use crate::services::{
    EducationService, PopulationService, RecipeService, WaterService, WeatherService,
};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client is reused across all upstream clients to enable connection
/// pooling and avoid socket exhaustion.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent("Utilihub/1.0")
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// Everything the API handlers and CLI commands share: the loaded config
/// and one lookup service per tool, all fanned out from a single pooled
/// HTTP client.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub weather: Arc<WeatherService>,

    pub population: Arc<PopulationService>,

    pub education: Arc<EducationService>,

    pub water: Arc<WaterService>,

    pub recipes: Arc<RecipeService>,
}

impl SharedState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client =
            build_shared_http_client(config.endpoints.request_timeout_seconds.into())?;

        let open_meteo = Arc::new(OpenMeteoClient::new(
            http_client.clone(),
            &config.endpoints.geocoding_url,
            &config.endpoints.forecast_url,
        ));
        let world_bank = Arc::new(WorldBankClient::new(
            http_client.clone(),
            &config.endpoints.world_bank_url,
        ));
        let overpass = Arc::new(OverpassClient::new(
            http_client.clone(),
            &config.endpoints.overpass_url,
        ));
        let mealdb = Arc::new(MealDbClient::new(
            http_client,
            &config.endpoints.mealdb_url,
        ));

        Ok(Self {
            weather: Arc::new(WeatherService::new(open_meteo.clone())),
            population: Arc::new(PopulationService::new(world_bank)),
            education: Arc::new(EducationService::new(open_meteo, overpass.clone())),
            water: Arc::new(WaterService::new(overpass)),
            recipes: Arc::new(RecipeService::new(mealdb)),
            config,
        })
    }
}
