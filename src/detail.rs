use crate::error::DetailError;
use crate::model::{estimate_minutes, is_quick_meal, IngredientLine, Recipe, RecipeDetail};
use crate::providers::{MealRecord, RecipeSource, INGREDIENT_SLOTS};
use log::{debug, error};

const NO_INSTRUCTIONS: &str = "No instructions provided.";
const SUBTITLE_SEPARATOR: &str = " · ";

/// Fetch one recipe and shape it for display.
///
/// `known` is the most recent search result; when it contains `id` its time
/// estimate is reused so the detail view agrees with the card.
pub async fn fetch_detail(
    source: &dyn RecipeSource,
    id: &str,
    known: &[Recipe],
) -> Result<RecipeDetail, DetailError> {
    debug!("Loading details for recipe {}", id);

    let record = source
        .lookup(id)
        .await
        .map_err(|e| {
            error!("Detail lookup for {} failed: {}", id, e);
            DetailError::from(e)
        })?
        .ok_or_else(|| DetailError::NotFound(id.to_string()))?;

    Ok(to_detail(id, record, known))
}

/// Map a raw record into a [`RecipeDetail`]
pub fn to_detail(id: &str, record: MealRecord, known: &[Recipe]) -> RecipeDetail {
    let name = record.name.clone().unwrap_or_default();
    let minutes = known
        .iter()
        .find(|recipe| recipe.id == id)
        .map(|recipe| recipe.minutes)
        .unwrap_or_else(|| estimate_minutes(&name));

    RecipeDetail {
        id: id.to_string(),
        subtitle: subtitle(&record),
        thumbnail: non_empty(record.thumbnail.as_deref()),
        ingredients: ingredient_lines(&record),
        instructions: clean_instructions(record.instructions.as_deref()),
        source_url: non_empty(record.source.as_deref()),
        name,
        minutes,
        is_quick: is_quick_meal(minutes),
    }
}

/// Non-empty ingredient slots in slot order, with their trimmed measures
fn ingredient_lines(record: &MealRecord) -> Vec<IngredientLine> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = record.ingredient(slot)?.trim();
            if ingredient.is_empty() {
                return None;
            }
            Some(IngredientLine {
                ingredient: ingredient.to_string(),
                measure: non_empty(record.measure(slot)),
            })
        })
        .collect()
}

fn subtitle(record: &MealRecord) -> Option<String> {
    let parts: Vec<&str> = [record.area.as_deref(), record.category.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SUBTITLE_SEPARATOR))
    }
}

/// Strip leading whitespace from each line (blank lines collapse), then trim
fn clean_instructions(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => NO_INSTRUCTIONS,
    };
    raw.lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
