//! Session usage with filters, sorting and favorites
//!
//! Favorites are kept in memory here; use `.data_dir(..)` to persist them.

use fridge2table::{Fridge2Table, Intent, SortMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = Fridge2Table::builder().in_memory().build()?;

    session.dispatch(Intent::Search("beef, onion".to_string())).await;
    println!("{}", session.status().message);

    session.dispatch(Intent::SetSort(SortMode::TimeAsc)).await;
    session.dispatch(Intent::SetQuickOnly(true)).await;

    for recipe in session.visible().recipes() {
        println!("{} · {} min", recipe.name, recipe.minutes);
    }

    let summary = session.summary();
    println!("Using: {} · {} idea(s) found", summary.query, summary.count);

    Ok(())
}
