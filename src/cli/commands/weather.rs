use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_weather(config: &Config, city: &str) -> anyhow::Result<()> {
    println!("Looking up weather for: {city}");

    let state = SharedState::new(config.clone())?;

    let report = match state.weather.lookup(city).await {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!();
    println!("{:-<60}", "");
    println!("{} °C", report.temperature_c);
    println!("Current temperature in {}", report.place.label());

    Ok(())
}
