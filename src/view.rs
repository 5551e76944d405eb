use crate::model::Recipe;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the visible recipe list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep the search's own order
    #[default]
    Default,
    NameAz,
    NameZa,
    TimeAsc,
    TimeDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Default,
        SortMode::NameAz,
        SortMode::NameZa,
        SortMode::TimeAsc,
        SortMode::TimeDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::NameAz => "name-az",
            SortMode::NameZa => "name-za",
            SortMode::TimeAsc => "time-asc",
            SortMode::TimeDesc => "time-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown sort mode '{}' (expected one of: default, name-az, name-za, time-asc, time-desc)",
                    s
                )
            })
    }
}

/// Filter and sort choices for the result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub sort: SortMode,
    /// Only recipes estimated at 20 minutes or less
    pub quick_only: bool,
    /// Only recipes whose IDs are bookmarked
    pub favorites_only: bool,
}

/// The subset of `recipes` to show, filtered and sorted per `options`.
///
/// Never reorders or mutates `recipes` itself.
pub fn compute_visible(
    recipes: &[Recipe],
    options: &ViewOptions,
    favorites: &HashSet<String>,
) -> Vec<Recipe> {
    let mut visible: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| !options.favorites_only || favorites.contains(&recipe.id))
        .filter(|recipe| !options.quick_only || recipe.is_quick)
        .cloned()
        .collect();

    match options.sort {
        SortMode::Default => {}
        SortMode::NameAz => visible.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortMode::NameZa => visible.sort_by(|a, b| locale_cmp(&b.name, &a.name)),
        SortMode::TimeAsc => visible.sort_by_key(|recipe| recipe.minutes),
        SortMode::TimeDesc => visible.sort_by(|a, b| b.minutes.cmp(&a.minutes)),
    }

    visible
}

/// Dictionary-style comparison: case-insensitive first, exact text breaks ties
fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.to_lowercase();
    let folded_b = b.to_lowercase();
    folded_a.cmp(&folded_b).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str, minutes: u32) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: String::new(),
            minutes,
            is_quick: minutes <= 20,
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("1", "beef stew", 30),
            recipe("2", "Apple Pie", 18),
            recipe("3", "Chili", 20),
            recipe("4", "Burger", 25),
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_keeps_order() {
        let recipes = sample();
        let visible = compute_visible(&recipes, &ViewOptions::default(), &HashSet::new());
        assert_eq!(ids(&visible), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let recipes = sample();
        let options = ViewOptions {
            sort: SortMode::NameAz,
            ..Default::default()
        };
        let visible = compute_visible(&recipes, &options, &HashSet::new());
        assert_eq!(ids(&visible), ["2", "1", "4", "3"]);

        let options = ViewOptions {
            sort: SortMode::NameZa,
            ..Default::default()
        };
        let visible = compute_visible(&recipes, &options, &HashSet::new());
        assert_eq!(ids(&visible), ["3", "4", "1", "2"]);
    }

    #[test]
    fn test_time_sort() {
        let recipes = sample();
        let options = ViewOptions {
            sort: SortMode::TimeAsc,
            ..Default::default()
        };
        assert_eq!(
            ids(&compute_visible(&recipes, &options, &HashSet::new())),
            ["2", "3", "4", "1"]
        );

        let options = ViewOptions {
            sort: SortMode::TimeDesc,
            ..Default::default()
        };
        assert_eq!(
            ids(&compute_visible(&recipes, &options, &HashSet::new())),
            ["1", "4", "3", "2"]
        );
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let recipes = sample();
        let favorites: HashSet<String> = ["1", "2"].iter().map(|s| s.to_string()).collect();

        let options = ViewOptions {
            favorites_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&compute_visible(&recipes, &options, &favorites)), ["1", "2"]);

        let options = ViewOptions {
            quick_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&compute_visible(&recipes, &options, &favorites)), ["2", "3"]);

        let options = ViewOptions {
            quick_only: true,
            favorites_only: true,
            sort: SortMode::Default,
        };
        assert_eq!(ids(&compute_visible(&recipes, &options, &favorites)), ["2"]);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let recipes = sample();
        let options = ViewOptions {
            sort: SortMode::TimeDesc,
            quick_only: false,
            favorites_only: false,
        };
        let first = compute_visible(&recipes, &options, &HashSet::new());
        let second = compute_visible(&recipes, &options, &HashSet::new());
        assert_eq!(first, second);
        assert_eq!(recipes, sample());
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("name-az".parse::<SortMode>().unwrap(), SortMode::NameAz);
        assert_eq!(" TIME-DESC ".parse::<SortMode>().unwrap(), SortMode::TimeDesc);
        assert!("newest".parse::<SortMode>().is_err());
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }
}
