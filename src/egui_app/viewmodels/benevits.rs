//! Benevits catalog view-model
//!
//! Holds the landing list, the member's unlocked offers and the search box
//! state. Search is debounced: every keystroke aborts the pending task and a
//! generation counter keeps an already-running one from applying stale
//! results. A landing load started before a remote search leaves the search
//! results alone, and nothing started before `clear_data` writes afterwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::egui_app::network::{Endpoint, NetworkService};
use crate::shared::benevit::{interleave, Benevit, BenevitsResponse, SearchResponse};
use crate::shared::config::AppConfig;
use crate::shared::error::NetworkError;
use crate::shared::strings;

/// Where search results come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Filter the loaded list in memory
    LocalFilter,
    /// Ask the search endpoint and replace the list with its answer
    Remote,
}

impl SearchMode {
    pub fn for_config(config: &AppConfig) -> Self {
        if config.use_mock_data {
            SearchMode::LocalFilter
        } else {
            SearchMode::Remote
        }
    }
}

/// Observable state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenevitsState {
    pub all_benevits: Vec<Benevit>,
    pub my_benevits: Vec<Benevit>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Follow-up line shown under `error_message`
    pub error_suggestion: Option<String>,
    pub search_query: String,
    pub is_searching: bool,
}

pub struct BenevitsViewModel<N> {
    network: Arc<N>,
    state: Arc<Mutex<BenevitsState>>,
    search_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    generation: Arc<AtomicU64>,
    epoch: Arc<AtomicU64>,
    mode: SearchMode,
    debounce: Duration,
}

impl<N> Clone for BenevitsViewModel<N> {
    fn clone(&self) -> Self {
        Self {
            network: Arc::clone(&self.network),
            state: Arc::clone(&self.state),
            search_task: Arc::clone(&self.search_task),
            generation: Arc::clone(&self.generation),
            epoch: Arc::clone(&self.epoch),
            mode: self.mode,
            debounce: self.debounce,
        }
    }
}

impl<N: NetworkService> BenevitsViewModel<N> {
    pub fn new(network: Arc<N>, config: &AppConfig) -> Self {
        Self {
            network,
            state: Arc::new(Mutex::new(BenevitsState::default())),
            search_task: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
            epoch: Arc::new(AtomicU64::new(0)),
            mode: SearchMode::for_config(config),
            debounce: config.search_debounce,
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn search_mode(&self) -> SearchMode {
        self.mode
    }

    /// Snapshot of the current state
    pub fn state(&self) -> BenevitsState {
        self.lock_state().clone()
    }

    pub fn all_benevits(&self) -> Vec<Benevit> {
        self.lock_state().all_benevits.clone()
    }

    pub fn my_benevits(&self) -> Vec<Benevit> {
        self.lock_state().my_benevits.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().is_loading
    }

    pub fn is_searching(&self) -> bool {
        self.lock_state().is_searching
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock_state().error_message.clone()
    }

    pub fn search_query(&self) -> String {
        self.lock_state().search_query.clone()
    }

    /// What the list should show for the current query
    pub fn displayed_benevits(&self) -> Vec<Benevit> {
        let state = self.lock_state();
        match self.mode {
            SearchMode::LocalFilter => {
                let query = state.search_query.trim();
                state.all_benevits.iter().filter(|b| b.matches(query)).cloned().collect()
            }
            SearchMode::Remote => state.all_benevits.clone(),
        }
    }

    /// Start a landing load in the background
    pub fn load_benevits(&self) -> JoinHandle<()> {
        let vm = self.clone();
        tokio::spawn(async move { vm.refresh().await })
    }

    /// Fetch the landing list and wait for it
    pub async fn refresh(&self) {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let generation = self.generation.load(Ordering::SeqCst);
        self.update(|state| {
            state.is_loading = true;
            state.error_message = None;
            state.error_suggestion = None;
        });

        let result = self.network.request::<BenevitsResponse>(Endpoint::LandingBenevits).await;

        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!("[SEARCH] Dropping landing load from a cleared session");
            return;
        }

        // In remote mode a newer search owns `all_benevits`
        let owns_list = self.mode == SearchMode::LocalFilter || self.is_current(generation);
        self.apply_landing(result, owns_list);

        self.update(|state| state.is_loading = false);
    }

    /// Record a keystroke in the search box
    pub fn search_benevits(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel_pending_search();

        let trimmed = query.trim().to_string();
        self.update(|state| {
            state.search_query = query.to_string();
            state.is_searching = !trimmed.is_empty();
        });

        if trimmed.is_empty() {
            if self.mode == SearchMode::Remote {
                let vm = self.clone();
                self.store_search_task(tokio::spawn(async move {
                    vm.reload_for_blank_query(generation).await;
                }));
            }
            return;
        }

        let vm = self.clone();
        self.store_search_task(tokio::spawn(async move {
            tokio::time::sleep(vm.debounce).await;
            if !vm.is_current(generation) {
                return;
            }
            match vm.mode {
                SearchMode::LocalFilter => {
                    tracing::debug!("[SEARCH] Filtering locally for '{}'", trimmed);
                    vm.update(|state| state.is_searching = false);
                }
                SearchMode::Remote => vm.perform_remote_search(generation, trimmed).await,
            }
        }));
    }

    pub fn retry(&self) -> JoinHandle<()> {
        self.clear_error();
        self.load_benevits()
    }

    pub fn clear_error(&self) {
        self.update(|state| {
            state.error_message = None;
            state.error_suggestion = None;
        });
    }

    /// Forget everything, used on logout
    pub fn clear_data(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cancel_pending_search();
        self.update(|state| *state = BenevitsState::default());
    }

    /// Confirmation text for a redemption request
    pub fn request_benevit(&self, benevit: &Benevit) -> String {
        tracing::info!("[SEARCH] Benevit requested: {} ({})", benevit.name, benevit.id);
        format!("{}: {}", strings::benevits::REQUEST_SUCCESS, benevit.name)
    }

    async fn perform_remote_search(&self, generation: u64, query: String) {
        tracing::info!("[SEARCH] Searching '{}'", query);
        let result = self.network.request::<SearchResponse>(Endpoint::search(query)).await;

        if !self.is_current(generation) {
            tracing::debug!("[SEARCH] Dropping stale results");
            return;
        }

        self.update(|state| {
            match result {
                Ok(response) => {
                    state.all_benevits = response.benevits;
                    state.error_message = None;
                    state.error_suggestion = None;
                }
                Err(e) => {
                    tracing::error!("[SEARCH] Search failed: {}", e);
                    state.error_message = Some(benevits_error_message(&e));
                    state.error_suggestion = Some(e.recovery_suggestion().to_string());
                }
            }
            state.is_searching = false;
        });
    }

    async fn reload_for_blank_query(&self, generation: u64) {
        let result = self.network.request::<BenevitsResponse>(Endpoint::LandingBenevits).await;
        if self.is_current(generation) {
            self.apply_landing(result, true);
        }
    }

    /// `owns_list` is false when a newer search result must stay on screen
    fn apply_landing(&self, result: Result<BenevitsResponse, NetworkError>, owns_list: bool) {
        match result {
            Ok(response) => {
                let (locked, unlocked) = response.into_tagged();
                let all = interleave(&locked, &unlocked);
                tracing::info!(
                    "[SEARCH] Loaded {} benevits ({} locked, {} unlocked)",
                    all.len(),
                    locked.len(),
                    unlocked.len()
                );
                self.update(|state| {
                    if owns_list {
                        state.all_benevits = all;
                    } else {
                        tracing::debug!("[SEARCH] Keeping newer search results");
                    }
                    state.my_benevits = unlocked;
                });
            }
            Err(e) if owns_list => {
                tracing::error!("[SEARCH] Failed to load benevits: {}", e);
                self.update(|state| {
                    state.error_message = Some(benevits_error_message(&e));
                    state.error_suggestion = Some(e.recovery_suggestion().to_string());
                });
            }
            Err(e) => {
                tracing::warn!("[SEARCH] Landing load failed behind a newer search: {}", e);
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn cancel_pending_search(&self) {
        let pending = self
            .search_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(handle) = pending {
            handle.abort();
        }
    }

    fn store_search_task(&self, handle: JoinHandle<()>) {
        *self.search_task.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(handle);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BenevitsState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update<R>(&self, f: impl FnOnce(&mut BenevitsState) -> R) -> R {
        f(&mut self.lock_state())
    }
}

/// Screen copy for a failed catalog call
pub fn benevits_error_message(error: &NetworkError) -> String {
    match error {
        NetworkError::Unauthorized => strings::benevits::SESSION_EXPIRED.to_string(),
        NetworkError::NoInternetConnection => strings::benevits::NO_INTERNET.to_string(),
        NetworkError::Timeout => strings::benevits::TIMEOUT.to_string(),
        other => other.to_string(),
    }
}
