//! Application state shared by every front end.
//!
//! Searches are stamped with a generation number when they start. A result is
//! applied only if no newer search has been issued since, so a slow, stale
//! response can never replace the results of the search the user made last.

use crate::error::{DetailError, SearchError};
use crate::model::{Recipe, RecipeDetail};
use crate::search::{IngredientQuery, SearchOutcome};
use crate::view::{compute_visible, SortMode, ViewOptions};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

pub const WELCOME_MESSAGE: &str = "Start by adding a couple of ingredients above ✨";
pub const BLANK_INPUT_MESSAGE: &str = "Pop in at least one ingredient to get started.";
pub const NO_TOKENS_MESSAGE: &str = "Try adding at least one ingredient (separated by commas).";
pub const SEARCHING_MESSAGE: &str = "Let me look for ideas that use those together…";
pub const RANDOM_MESSAGE: &str = "Trying a random combo…";
pub const NO_COMMON_MATCH_MESSAGE: &str =
    "I couldn't find anything with all of those together — try removing one or two.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Something went wrong while fetching recipes. Please try again in a moment.";
pub const DETAIL_NOT_FOUND_MESSAGE: &str = "Could not find more details for this recipe.";
pub const DETAIL_ERROR_MESSAGE: &str =
    "Something went wrong while loading this recipe. Please try again.";
/// Shown in the summary before any query has been made
pub const NO_QUERY_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line status shown under the search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

/// What the results area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    /// No search has completed and nothing was queried yet
    NotSearchedYet,
    /// There are results, or a query was made, but the filters leave nothing
    NothingMatchesFilters,
    Recipes(Vec<Recipe>),
}

impl ViewContent {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            ViewContent::Recipes(recipes) => recipes,
            _ => &[],
        }
    }
}

/// "Using: <query> · <count> idea(s) found"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub query: String,
}

/// Detail panel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Loading { id: String },
    Loaded(RecipeDetail),
    Failed { id: String, message: String },
}

/// Handle for a search in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle for a detail lookup in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct AppState {
    recipes: Vec<Recipe>,
    last_query: String,
    options: ViewOptions,
    status: Status,
    detail: DetailView,
    contrast_mode: bool,
    search_generation: u64,
    detail_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            recipes: Vec::new(),
            last_query: String::new(),
            options: ViewOptions::default(),
            status: Status::info(WELCOME_MESSAGE),
            detail: DetailView::Closed,
            contrast_mode: false,
            search_generation: 0,
            detail_generation: 0,
        }
    }

    /// Recipes from the most recent applied search
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The user's terms for the most recently issued search, joined with ", "
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn contrast_mode(&self) -> bool {
        self.contrast_mode
    }

    pub fn set_contrast_mode(&mut self, enabled: bool) {
        self.contrast_mode = enabled;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.options.sort = sort;
    }

    pub fn set_quick_only(&mut self, enabled: bool) {
        self.options.quick_only = enabled;
    }

    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.options.favorites_only = enabled;
    }

    fn next_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        SearchTicket {
            generation: self.search_generation,
        }
    }

    /// Whether `ticket` belongs to the most recently issued search
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.generation == self.search_generation
    }

    /// Record a new search and return its ticket; supersedes any in flight
    pub fn begin_search(&mut self, query: &IngredientQuery) -> SearchTicket {
        let ticket = self.next_search();
        self.last_query = query.display_text();
        self.status = Status::info(SEARCHING_MESSAGE);
        debug!(
            "Search #{} started for '{}'",
            ticket.generation, self.last_query
        );
        ticket
    }

    /// Input had no usable ingredients; clears results and supersedes searches in flight
    pub fn reject_query(&mut self, raw: &str) {
        self.next_search();
        self.recipes.clear();
        let message = if raw.trim().is_empty() {
            BLANK_INPUT_MESSAGE
        } else {
            NO_TOKENS_MESSAGE
        };
        self.status = Status::error(message);
    }

    /// Apply a finished search; returns `false` if it was superseded and dropped
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: &Result<SearchOutcome, SearchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "Discarding result of search #{} (latest is #{})",
                ticket.generation, self.search_generation
            );
            return false;
        }

        match result {
            Ok(SearchOutcome::Found(recipes)) => {
                self.recipes = recipes.clone();
                self.status = Status::info(format!(
                    "Here are {} ideas you can make with those ingredients.",
                    recipes.len()
                ));
            }
            Ok(SearchOutcome::NoCommonMatch) => {
                self.recipes.clear();
                self.status = Status::info(NO_COMMON_MATCH_MESSAGE);
            }
            Err(SearchError::EmptyQuery) => {
                self.recipes.clear();
                self.status = Status::error(NO_TOKENS_MESSAGE);
            }
            Err(SearchError::Network { .. }) => {
                self.recipes.clear();
                self.status = Status::error(NETWORK_ERROR_MESSAGE);
            }
        }
        true
    }

    pub fn begin_detail(&mut self, id: &str) -> DetailTicket {
        self.detail_generation += 1;
        self.detail = DetailView::Loading { id: id.to_string() };
        DetailTicket {
            generation: self.detail_generation,
        }
    }

    /// Apply a finished detail lookup unless another was opened (or the panel closed) since
    pub fn finish_detail(
        &mut self,
        ticket: DetailTicket,
        id: &str,
        result: &Result<RecipeDetail, DetailError>,
    ) -> bool {
        if ticket.generation != self.detail_generation {
            return false;
        }
        self.detail = match result {
            Ok(detail) => DetailView::Loaded(detail.clone()),
            Err(DetailError::NotFound(_)) => DetailView::Failed {
                id: id.to_string(),
                message: DETAIL_NOT_FOUND_MESSAGE.to_string(),
            },
            Err(DetailError::Network { .. }) => DetailView::Failed {
                id: id.to_string(),
                message: DETAIL_ERROR_MESSAGE.to_string(),
            },
        };
        true
    }

    pub fn close_detail(&mut self) {
        self.detail_generation += 1;
        self.detail = DetailView::Closed;
    }

    /// Recipes to render after filters and sort
    pub fn visible(&self, favorites: &HashSet<String>) -> ViewContent {
        if self.recipes.is_empty() && self.last_query.is_empty() {
            return ViewContent::NotSearchedYet;
        }
        let visible = compute_visible(&self.recipes, &self.options, favorites);
        if visible.is_empty() {
            ViewContent::NothingMatchesFilters
        } else {
            ViewContent::Recipes(visible)
        }
    }

    pub fn summary(&self, favorites: &HashSet<String>) -> Summary {
        let query = if self.last_query.is_empty() {
            NO_QUERY_PLACEHOLDER.to_string()
        } else {
            self.last_query.clone()
        };
        Summary {
            count: self.visible(favorites).recipes().len(),
            query,
        }
    }
}
