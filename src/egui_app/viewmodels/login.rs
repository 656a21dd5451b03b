//! Login view-model
//!
//! Validates the username (11 digit NSS) and password as they are typed,
//! encrypts the pair, calls the login endpoint and stores the JWT the server
//! hands back in the response headers.

use std::sync::{Arc, Mutex};

use reqwest::header::HeaderMap;

use crate::egui_app::network::{Endpoint, NetworkService};
use crate::egui_app::security::{encrypt_or_mock, RsaEncryption};
use crate::egui_app::session::SessionStore;
use crate::shared::auth::EmptyResponse;
use crate::shared::error::NetworkError;
use crate::shared::strings;

/// Required username length
pub const USERNAME_LENGTH: usize = 11;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Response headers that may carry the token, in lookup order
const TOKEN_HEADERS: [&str; 3] = ["authorization", "token", "jwt"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_authenticated: bool,
}

pub struct LoginViewModel<N> {
    network: Arc<N>,
    session: Arc<dyn SessionStore>,
    encryption: Option<RsaEncryption>,
    state: Arc<Mutex<LoginState>>,
}

impl<N> Clone for LoginViewModel<N> {
    fn clone(&self) -> Self {
        Self {
            network: Arc::clone(&self.network),
            session: Arc::clone(&self.session),
            encryption: self.encryption.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<N: NetworkService> LoginViewModel<N> {
    /// Uses the built-in service key; a key that fails to parse falls back to the mock blob
    pub fn new(network: Arc<N>, session: Arc<dyn SessionStore>) -> Self {
        let encryption = match RsaEncryption::service_key() {
            Ok(rsa) => Some(rsa),
            Err(e) => {
                tracing::warn!("[AUTH] Service key unavailable, credentials will use the mock blob: {}", e);
                None
            }
        };
        Self::with_encryption(network, session, encryption)
    }

    pub fn with_encryption(
        network: Arc<N>,
        session: Arc<dyn SessionStore>,
        encryption: Option<RsaEncryption>,
    ) -> Self {
        let is_authenticated = session.has_active_session();
        if is_authenticated {
            tracing::info!("[SESSION] Existing session found");
        }

        Self {
            network,
            session,
            encryption,
            state: Arc::new(Mutex::new(LoginState {
                is_authenticated,
                ..LoginState::default()
            })),
        }
    }

    pub fn state(&self) -> LoginState {
        self.lock_state().clone()
    }

    pub fn username(&self) -> String {
        self.lock_state().username.clone()
    }

    pub fn password(&self) -> String {
        self.lock_state().password.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().is_loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock_state().error_message.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_state().is_authenticated
    }

    pub fn set_username(&self, username: impl Into<String>) {
        self.lock_state().username = username.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.lock_state().password = password.into();
    }

    pub fn is_login_button_enabled(&self) -> bool {
        let state = self.lock_state();
        !state.username.is_empty() && !state.password.is_empty() && !state.is_loading
    }

    pub fn is_username_valid(&self) -> bool {
        is_valid_username(&self.lock_state().username)
    }

    pub fn is_password_valid(&self) -> bool {
        is_valid_password(&self.lock_state().password)
    }

    /// Authenticate with the current credentials
    pub async fn login(&self) {
        if !self.is_login_button_enabled() {
            return;
        }

        let (username, password) = {
            let state = self.lock_state();
            (state.username.clone(), state.password.clone())
        };

        if !is_valid_username(&username) {
            self.set_error(strings::login::USERNAME_ERROR);
            return;
        }
        if !is_valid_password(&password) {
            self.set_error(strings::login::PASSWORD_ERROR);
            return;
        }

        {
            let mut state = self.lock_state();
            state.is_loading = true;
            state.error_message = None;
        }

        tracing::info!("[AUTH] Logging in {}", username);
        let credentials = encrypt_or_mock(self.encryption.as_ref(), &username, &password);
        let result = self
            .network
            .request_with_headers::<EmptyResponse>(Endpoint::login(credentials, username, password))
            .await;

        let outcome = match result {
            Ok((_, headers)) => self.store_token(&headers),
            Err(e) => {
                tracing::error!("[AUTH] Login failed: {}", e);
                Err(login_error_message(&e))
            }
        };

        let mut state = self.lock_state();
        state.is_loading = false;
        match outcome {
            Ok(()) => {
                tracing::info!("[AUTH] Login successful");
                state.is_authenticated = true;
            }
            Err(message) => state.error_message = Some(message),
        }
    }

    /// Delete the stored token and reset the form
    pub fn logout(&self) {
        self.session.logout();
        *self.lock_state() = LoginState::default();
    }

    pub fn clear_error(&self) {
        self.lock_state().error_message = None;
    }

    pub fn clear_credentials(&self) {
        let mut state = self.lock_state();
        state.username.clear();
        state.password.clear();
    }

    fn store_token(&self, headers: &HeaderMap) -> Result<(), String> {
        let Some(token) = extract_jwt(headers) else {
            tracing::error!("[AUTH] No token in login response headers");
            return Err(strings::login::AUTH_TOKEN_ERROR.to_string());
        };

        self.session.save_token(&token).map_err(|e| {
            tracing::error!("[SESSION] Failed to save token: {}", e);
            strings::login::SESSION_SAVE_ERROR.to_string()
        })
    }

    fn set_error(&self, message: &str) {
        self.lock_state().error_message = Some(message.to_string());
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LoginState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Empty, or exactly 11 ASCII digits
pub fn is_valid_username(username: &str) -> bool {
    username.is_empty() || (username.len() == USERNAME_LENGTH && username.chars().all(|c| c.is_ascii_digit()))
}

/// Empty, or at least 8 characters
pub fn is_valid_password(password: &str) -> bool {
    password.is_empty() || password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Keep digits only, at most 11 of them
pub fn validate_username_input(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(USERNAME_LENGTH).collect()
}

/// Token from the first auth header present, without the `Bearer ` prefix
pub fn extract_jwt(headers: &HeaderMap) -> Option<String> {
    TOKEN_HEADERS.iter().find_map(|name| {
        let value = headers.get(*name)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
        (!token.is_empty()).then(|| token.to_string())
    })
}

/// Screen copy for a failed login call
pub fn login_error_message(error: &NetworkError) -> String {
    match error {
        NetworkError::Unauthorized => strings::login::LOGIN_FAILED.to_string(),
        NetworkError::NoInternetConnection => strings::login::NO_INTERNET.to_string(),
        NetworkError::Timeout => strings::login::TIMEOUT.to_string(),
        other => other.to_string(),
    }
}
