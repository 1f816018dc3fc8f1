use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_water(config: &Config, city: &str) -> anyhow::Result<()> {
    println!("Scanning for water resources in: {city}");

    let state = SharedState::new(config.clone())?;

    let bodies = match state.water.lookup(city).await {
        Ok(bodies) => bodies,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    println!();
    println!("Water Resources ({} found)", bodies.len());
    println!("{:-<60}", "");

    for body in &bodies {
        println!("• {} ({})", body.name, body.kind);
    }

    Ok(())
}
