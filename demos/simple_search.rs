//! Simple API usage with convenience functions
//!
//! Searches the public API for recipes using every ingredient, then loads
//! the first result's full details.

use fridge2table::{recipe_detail, search_recipes, SearchOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Search ===");
    let outcome = search_recipes("chicken, garlic").await?;

    let recipes = match outcome {
        SearchOutcome::Found(recipes) => recipes,
        SearchOutcome::NoCommonMatch => {
            println!("Nothing uses all of those together.");
            return Ok(());
        }
    };

    for recipe in &recipes {
        println!("[{}] {} ({} min)", recipe.id, recipe.name, recipe.minutes);
    }

    println!("\n=== Details ===");
    let detail = recipe_detail(&recipes[0].id).await?;
    println!("{}", detail.name);
    for line in &detail.ingredients {
        println!("  • {}", line);
    }

    Ok(())
}
