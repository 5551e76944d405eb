//! Terminal and JSON rendering for the CLI.

use fridge2table::{RecipeDetail, Status, StatusKind, Summary, ViewContent};
use serde_json::json;

const NOTHING_YET: &str = "No ideas yet. Start by adding a few ingredients above ✨";
const NOTHING_MATCHES: &str =
    "Nothing matches these filters yet — try relaxing one of the options above.";

pub fn format_status(status: &Status) -> String {
    match status.kind {
        StatusKind::Info => status.message.clone(),
        StatusKind::Error => format!("error: {}", status.message),
    }
}

/// Recipe cards, one per line, followed by the summary line
pub fn format_results(
    content: &ViewContent,
    summary: &Summary,
    is_favorite: impl Fn(&str) -> bool,
) -> String {
    let mut lines = Vec::new();

    match content {
        ViewContent::NotSearchedYet => lines.push(NOTHING_YET.to_string()),
        ViewContent::NothingMatchesFilters => lines.push(NOTHING_MATCHES.to_string()),
        ViewContent::Recipes(recipes) => {
            for recipe in recipes {
                let star = if is_favorite(&recipe.id) { "★" } else { "☆" };
                let quick = if recipe.is_quick { "  Quick (≤ 20 min)" } else { "" };
                lines.push(format!(
                    "{} [{}] {} · {} min{}",
                    star, recipe.id, recipe.name, recipe.minutes, quick
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Using: {} · {} idea(s) found",
        summary.query, summary.count
    ));
    lines.join("\n")
}

pub fn format_results_json(content: &ViewContent, summary: &Summary) -> String {
    let value = json!({
        "query": summary.query,
        "count": summary.count,
        "recipes": content.recipes(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_detail(detail: &RecipeDetail, is_favorite: bool) -> String {
    let mut out = String::new();
    out.push_str(&detail.name);
    if is_favorite {
        out.push_str("  ★");
    }
    out.push('\n');
    if let Some(subtitle) = &detail.subtitle {
        out.push_str(subtitle);
        out.push('\n');
    }
    out.push_str(&format!("{} min", detail.minutes));
    if detail.is_quick {
        out.push_str(" · Quick (≤ 20 min)");
    }
    out.push_str("\n\nIngredients\n");
    for line in &detail.ingredients {
        out.push_str(&format!("  • {}\n", line));
    }
    out.push_str("\nInstructions\n");
    out.push_str(&detail.instructions);
    out.push('\n');
    if let Some(source) = &detail.source_url {
        out.push_str(&format!("\nSource: {}\n", source));
    }
    out
}

pub fn format_detail_json(detail: &RecipeDetail) -> String {
    serde_json::to_string_pretty(detail).unwrap_or_else(|_| "{}".to_string())
}
