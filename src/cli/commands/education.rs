use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_education(config: &Config, city: &str) -> anyhow::Result<()> {
    println!("Scanning for institutions in: {city}");

    let state = SharedState::new(config.clone())?;

    let report = match state.education.lookup(city).await {
        Ok(report) => report,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    if let Some(center) = &report.center {
        println!(
            "✓ Located {} ({:.4}, {:.4})",
            center.label(),
            center.latitude,
            center.longitude
        );
    }

    println!();
    println!("Institutions ({} found)", report.institutions.len());
    println!("{:-<60}", "");

    for institution in &report.institutions {
        println!("• {}", institution.name);
        println!("  {}", institution.kind.to_uppercase());
    }

    Ok(())
}
