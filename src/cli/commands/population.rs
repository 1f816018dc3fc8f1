use crate::config::Config;
use crate::models::population::group_thousands;
use crate::state::SharedState;

pub async fn cmd_population(config: &Config, country: &str) -> anyhow::Result<()> {
    println!("Looking up population for: {country}");

    let state = SharedState::new(config.clone())?;

    let report = match state.population.lookup(country).await {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!();
    println!("Population for {} (most recent year)", report.country_code);
    println!("{:-<60}", "");
    println!("  Male:   {}", group_thousands(report.male));
    println!("  Female: {}", group_thousands(report.female));

    Ok(())
}
