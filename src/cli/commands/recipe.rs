use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_recipe(config: &Config, food: &str) -> anyhow::Result<()> {
    println!("Searching recipes for: {food}");

    let state = SharedState::new(config.clone())?;

    let recipes = match state.recipes.lookup(food).await {
        Ok(recipes) => recipes,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let first = &recipes[0];

    println!();
    println!("{}", first.name);
    println!("{:-<60}", "");

    let origin: Vec<&str> = [first.category.as_deref(), first.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        println!("{}", origin.join(" | "));
    }

    if !first.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &first.ingredients {
            match ingredient.measure.as_deref() {
                Some(measure) => println!("  • {} - {}", ingredient.name, measure),
                None => println!("  • {}", ingredient.name),
            }
        }
    }

    if let Some(instructions) = &first.instructions {
        println!();
        println!("Instructions:");
        println!("{instructions}");
    }

    if let Some(url) = &first.youtube {
        println!();
        println!("Watch: {url}");
    }

    if recipes.len() > 1 {
        println!();
        println!("Other matches ({}):", recipes.len() - 1);
        for recipe in recipes.iter().skip(1) {
            println!("  • {}", recipe.name);
        }
    }

    Ok(())
}
