use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::egui_app::network::reachability::probe_address;
use crate::egui_app::network::{NetworkClient, Reachability};
use crate::egui_app::session::{FileSessionStore, MemorySessionStore, SessionStore};
use crate::egui_app::types::Notice;
use crate::egui_app::viewmodels::login::validate_username_input;
use crate::egui_app::viewmodels::{BenevitsViewModel, LoginViewModel};
use crate::egui_app::{AppView, Config};
use crate::shared::benevit::Benevit;
use crate::shared::error::NetworkError;

/// How often the connectivity monitor probes the API host
const REACHABILITY_INTERVAL: Duration = Duration::from_secs(10);

/// Failures while wiring up the app
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("could not build HTTP client: {0}")]
    Network(#[from] NetworkError),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub login: LoginViewModel<NetworkClient>,
    pub benevits: BenevitsViewModel<NetworkClient>,
    pub reachability: Reachability,
    pub current_view: AppView,

    pub username_input: String,
    pub password_input: String,
    pub search_input: String,

    pub show_side_menu: bool,
    pub show_logout_confirm: bool,
    pub notice: Option<Notice>,

    monitor: Option<JoinHandle<()>>,
    runtime: Runtime,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let session: Arc<dyn SessionStore> = match config.session_path() {
            Ok(path) => Arc::new(FileSessionStore::new(path)),
            Err(e) => {
                tracing::warn!("[SESSION] No data directory, session will not persist: {}", e);
                Arc::new(MemorySessionStore::new())
            }
        };

        let reachability = Reachability::new();
        let network = Arc::new(
            NetworkClient::new(config.clone(), Arc::clone(&session))?.with_reachability(reachability.clone()),
        );

        let login = LoginViewModel::new(Arc::clone(&network), session);
        let benevits = BenevitsViewModel::new(network, config.app());

        // Only live mode talks to the API host
        let monitor = if config.use_mock_data() {
            None
        } else {
            probe_address(config.server_url()).map(|addr| {
                let _guard = runtime.enter();
                reachability.spawn_monitor(addr, REACHABILITY_INTERVAL)
            })
        };

        tracing::info!(
            "[CONFIG] Server {} ({} data)",
            config.server_url(),
            if config.use_mock_data() { "mock" } else { "live" }
        );

        let mut state = Self {
            config,
            login,
            benevits,
            reachability,
            current_view: AppView::Login,
            username_input: String::new(),
            password_input: String::new(),
            search_input: String::new(),
            show_side_menu: false,
            show_logout_confirm: false,
            notice: None,
            monitor,
            runtime,
        };

        if state.login.is_authenticated() {
            state.enter_home();
        }

        Ok(state)
    }

    /// Per-frame bookkeeping: pick up finished logins and expire notices
    pub fn poll(&mut self) {
        if self.current_view == AppView::Login && self.login.is_authenticated() {
            self.enter_home();
        }

        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    /// Something is in flight and the UI should keep repainting
    pub fn is_busy(&self) -> bool {
        self.login.is_loading() || self.benevits.is_loading() || self.benevits.is_searching() || self.notice.is_some()
    }

    pub fn on_username_changed(&mut self) {
        self.username_input = validate_username_input(&self.username_input);
        self.login.set_username(self.username_input.clone());
    }

    pub fn on_password_changed(&mut self) {
        self.login.set_password(self.password_input.clone());
    }

    pub fn handle_login(&mut self) {
        let vm = self.login.clone();
        self.runtime.spawn(async move { vm.login().await });
    }

    pub fn on_search_changed(&mut self) {
        let _guard = self.runtime.enter();
        self.benevits.search_benevits(&self.search_input);
    }

    pub fn retry(&mut self) {
        let _guard = self.runtime.enter();
        self.benevits.retry();
    }

    pub fn request_benevit(&mut self, benevit: &Benevit) {
        let message = self.benevits.request_benevit(benevit);
        self.notice = Some(Notice::new(message));
    }

    pub fn open_view(&mut self, view: AppView) {
        if view.requires_session() && !self.login.is_authenticated() {
            return;
        }
        self.current_view = view;
        self.show_side_menu = false;
    }

    pub fn toggle_side_menu(&mut self) {
        self.show_side_menu = !self.show_side_menu;
    }

    pub fn request_logout(&mut self) {
        self.show_side_menu = false;
        self.show_logout_confirm = true;
    }

    pub fn cancel_logout(&mut self) {
        self.show_logout_confirm = false;
    }

    pub fn logout(&mut self) {
        self.login.logout();
        self.benevits.clear_data();
        self.username_input.clear();
        self.password_input.clear();
        self.search_input.clear();
        self.show_logout_confirm = false;
        self.show_side_menu = false;
        self.notice = None;
        self.current_view = AppView::Login;
    }

    fn enter_home(&mut self) {
        tracing::info!("[AUTH] Session active, loading benevits");
        self.password_input.clear();
        self.login.clear_credentials();
        self.current_view = AppView::Home;
        let _guard = self.runtime.enter();
        self.benevits.load_benevits();
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Some(monitor) = self.monitor.take() {
            monitor.abort();
        }
    }
}
