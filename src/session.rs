use crate::detail::fetch_detail;
use crate::error::{DetailError, SearchError};
use crate::favorites::FavoritesStore;
use crate::model::RecipeDetail;
use crate::normalizer::Normalizer;
use crate::preferences::{load_contrast_mode, save_contrast_mode};
use crate::providers::RecipeSource;
use crate::search::{search_query, IngredientQuery, SearchOutcome};
use crate::state::{AppState, Status, Summary, ViewContent, RANDOM_MESSAGE};
use crate::suggest::{random_suggestion, DEFAULT_COUNT, DEFAULT_POOL};
use crate::view::{SortMode, ViewOptions};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

/// User actions a front end forwards to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    RandomSearch,
    OpenDetail(String),
    CloseDetail,
    ToggleFavorite(String),
    SetSort(SortMode),
    SetQuickOnly(bool),
    SetFavoritesOnly(bool),
    ToggleContrast,
}

/// Receives a snapshot after every state change.
///
/// Called with no session locks held, so listeners may call back into the session.
pub trait StateListener: Send + Sync {
    fn state_changed(&self, state: &AppState);
}

/// Lock a mutex, recovering the data if a previous holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One user's recipe-finding session: search results, filters, favorites.
///
/// Methods take `&self` so overlapping searches can run from one session;
/// state is only locked for synchronous updates, never across a request.
pub struct Session {
    source: Arc<dyn RecipeSource>,
    normalizer: Normalizer,
    suggestion_pool: Vec<String>,
    suggestion_count: usize,
    state: Mutex<AppState>,
    favorites: Mutex<FavoritesStore>,
    listeners: Mutex<Vec<Arc<dyn StateListener>>>,
}

impl Session {
    pub fn new(source: Arc<dyn RecipeSource>, favorites: FavoritesStore) -> Self {
        let mut state = AppState::new();
        state.set_contrast_mode(load_contrast_mode(favorites.store()));

        Session {
            source,
            normalizer: Normalizer::default(),
            suggestion_pool: DEFAULT_POOL.iter().map(|s| s.to_string()).collect(),
            suggestion_count: DEFAULT_COUNT,
            state: Mutex::new(state),
            favorites: Mutex::new(favorites),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_suggestions(mut self, pool: Vec<String>, count: usize) -> Self {
        self.suggestion_pool = pool;
        self.suggestion_count = count;
        self
    }

    pub fn add_listener(&self, listener: Arc<dyn StateListener>) {
        lock(&self.listeners).push(listener);
    }

    /// Apply a user intent; outcomes are reflected in the state
    pub async fn dispatch(&self, intent: Intent) {
        debug!("Dispatching {:?}", intent);
        match intent {
            Intent::Search(raw) => {
                let _ = self.submit_search(&raw).await;
            }
            Intent::RandomSearch => {
                let _ = self.random_search().await;
            }
            Intent::OpenDetail(id) => {
                let _ = self.open_detail(&id).await;
            }
            Intent::CloseDetail => self.close_detail(),
            Intent::ToggleFavorite(id) => {
                self.toggle_favorite(&id);
            }
            Intent::SetSort(sort) => self.update(|state| state.set_sort(sort)),
            Intent::SetQuickOnly(enabled) => self.update(|state| state.set_quick_only(enabled)),
            Intent::SetFavoritesOnly(enabled) => {
                self.update(|state| state.set_favorites_only(enabled))
            }
            Intent::ToggleContrast => {
                self.toggle_contrast_mode();
            }
        }
    }

    /// Search and update the shared results, unless a newer search was issued meanwhile.
    ///
    /// The outcome is returned either way.
    pub async fn submit_search(&self, raw: &str) -> Result<SearchOutcome, SearchError> {
        let query = match IngredientQuery::parse(raw, &self.normalizer) {
            Ok(query) => query,
            Err(e) => {
                self.update(|state| state.reject_query(raw));
                return Err(e);
            }
        };

        let ticket = self.update(|state| state.begin_search(&query));
        let result = search_query(self.source.as_ref(), &query).await;
        self.update(|state| state.finish_search(ticket, &result));
        result
    }

    /// Search with a random pick of ingredients; returns the input that was used
    pub async fn random_search(&self) -> (String, Result<SearchOutcome, SearchError>) {
        let suggestion = random_suggestion(&self.suggestion_pool, self.suggestion_count);
        self.update(|state| state.set_status(Status::info(RANDOM_MESSAGE)));
        let result = self.submit_search(&suggestion).await;
        (suggestion, result)
    }

    pub async fn open_detail(&self, id: &str) -> Result<RecipeDetail, DetailError> {
        let (ticket, known) = self.update(|state| (state.begin_detail(id), state.recipes().to_vec()));
        let result = fetch_detail(self.source.as_ref(), id, &known).await;
        self.update(|state| state.finish_detail(ticket, id, &result));
        result
    }

    pub fn close_detail(&self) {
        self.update(AppState::close_detail);
    }

    /// Returns whether `id` is a favorite after the toggle
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let now_favorite = lock(&self.favorites).toggle(id);
        self.notify();
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        lock(&self.favorites).is_favorite(id)
    }

    pub fn favorite_ids(&self) -> Vec<String> {
        lock(&self.favorites).sorted_ids()
    }

    pub fn set_options(&self, options: ViewOptions) {
        self.update(|state| state.set_options(options));
    }

    pub fn contrast_mode(&self) -> bool {
        lock(&self.state).contrast_mode()
    }

    pub fn set_contrast_mode(&self, enabled: bool) {
        save_contrast_mode(lock(&self.favorites).store_mut(), enabled);
        self.update(|state| state.set_contrast_mode(enabled));
    }

    /// Returns the new setting
    pub fn toggle_contrast_mode(&self) -> bool {
        let enabled = !self.contrast_mode();
        self.set_contrast_mode(enabled);
        enabled
    }

    pub fn visible(&self) -> ViewContent {
        let favorites = lock(&self.favorites).ids().clone();
        lock(&self.state).visible(&favorites)
    }

    pub fn summary(&self) -> Summary {
        let favorites = lock(&self.favorites).ids().clone();
        lock(&self.state).summary(&favorites)
    }

    pub fn status(&self) -> Status {
        lock(&self.state).status().clone()
    }

    pub fn snapshot(&self) -> AppState {
        lock(&self.state).clone()
    }

    /// Run `f` against the state, then notify listeners with the result
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = f(&mut lock(&self.state));
        self.notify();
        result
    }

    fn notify(&self) {
        let listeners = lock(&self.listeners).clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener.state_changed(&snapshot);
        }
    }
}
