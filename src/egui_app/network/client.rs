//! Network client
//!
//! Routes every call either to the simulated responder or to the live API,
//! depending on [`AppConfig::use_mock_data`](crate::shared::config::AppConfig).
//! One HTTP call per invocation; no retries.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoint::Endpoint;
use super::mock::{self, CredentialScenario};
use super::reachability::Reachability;
use super::NetworkService;
use crate::egui_app::config::Config;
use crate::egui_app::session::SessionStore;
use crate::shared::auth::EmptyResponse;
use crate::shared::error::NetworkError;

/// reqwest-backed [`NetworkService`] with a built-in simulated responder
pub struct NetworkClient {
    config: Config,
    client: Client,
    session: Arc<dyn SessionStore>,
    reachability: Reachability,
}

impl NetworkClient {
    pub fn new(config: Config, session: Arc<dyn SessionStore>) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(config.app().request_timeout)
            .build()?;

        Ok(Self {
            config,
            client,
            session,
            reachability: Reachability::new(),
        })
    }

    /// Share an existing connectivity monitor
    pub fn with_reachability(mut self, reachability: Reachability) -> Self {
        self.reachability = reachability;
        self
    }

    pub fn reachability(&self) -> &Reachability {
        &self.reachability
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn handle_mock_request<T>(&self, endpoint: Endpoint) -> Result<(T, HeaderMap), NetworkError>
    where
        T: DeserializeOwned,
    {
        if !self.reachability.is_connected() {
            tracing::warn!("[MOCK] No internet connection");
            return Err(NetworkError::NoInternetConnection);
        }

        tokio::time::sleep(self.config.app().mock_delay).await;

        match endpoint {
            Endpoint::Login { username, password, .. } => self.handle_mock_login(&username, &password).await,
            Endpoint::LandingBenevits => {
                tracing::info!("[MOCK] Serving landing benevits");
                Ok((decode_canned(&mock::benevits_response())?, mock::mock_headers()))
            }
            Endpoint::SearchBenevits { query } => {
                tracing::info!("[MOCK] Serving search results for '{}'", query);
                Ok((decode_canned(&mock::search_response())?, mock::mock_headers()))
            }
        }
    }

    async fn handle_mock_login<T>(&self, username: &str, password: &str) -> Result<(T, HeaderMap), NetworkError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("[MOCK] Validating user {}", username);

        match mock::validate_credentials(username, password) {
            Some(CredentialScenario::Success) => {
                tracing::info!("[MOCK] Login successful");
                Ok((decode_canned(&EmptyResponse::ok("Login exitoso"))?, mock::mock_headers()))
            }
            Some(CredentialScenario::ServerError) => {
                tracing::warn!("[MOCK] Simulated server error (500)");
                Err(NetworkError::ServerError(500))
            }
            Some(CredentialScenario::Timeout) => {
                tracing::warn!("[MOCK] Simulated timeout");
                tokio::time::sleep(self.config.app().mock_timeout_delay).await;
                Err(NetworkError::Timeout)
            }
            None => {
                tracing::warn!("[MOCK] Invalid credentials");
                Err(NetworkError::Unauthorized)
            }
        }
    }

    async fn handle_real_request<T>(&self, endpoint: Endpoint) -> Result<(T, HeaderMap), NetworkError>
    where
        T: DeserializeOwned,
    {
        let url = reqwest::Url::parse(&self.config.api_url(endpoint.path())).map_err(|_| NetworkError::InvalidUrl)?;

        let token = if endpoint.requires_auth() {
            self.session.get_token()
        } else {
            None
        };

        let mut request = self
            .client
            .request(endpoint.method().into(), url)
            .headers(endpoint.headers(token.as_deref()));
        if let Some(body) = endpoint.body() {
            request = request.json(&body);
        }

        tracing::debug!("[NET] {} {}", endpoint.method().as_str(), endpoint.path());
        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();

        match status.as_u16() {
            200..=299 => {
                let bytes = response.bytes().await?;
                let data = serde_json::from_slice(&bytes).map_err(|e| {
                    tracing::error!("[NET] Decoding error on {}: {}", endpoint.path(), e);
                    NetworkError::DecodingError
                })?;
                Ok((data, headers))
            }
            401 => Err(NetworkError::Unauthorized),
            code => {
                tracing::warn!("[NET] {} answered {}", endpoint.path(), code);
                Err(NetworkError::ServerError(code))
            }
        }
    }
}

impl NetworkService for NetworkClient {
    fn request_with_headers<T>(
        &self,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(T, HeaderMap), NetworkError>> + Send
    where
        T: DeserializeOwned + Send + 'static,
    {
        async move {
            if self.config.use_mock_data() {
                self.handle_mock_request(endpoint).await
            } else {
                self.handle_real_request(endpoint).await
            }
        }
    }
}

/// Run a canned payload through the same decode step a real body would take
fn decode_canned<S, T>(payload: &S) -> Result<T, NetworkError>
where
    S: Serialize,
    T: DeserializeOwned,
{
    let value = serde_json::to_value(payload).map_err(|_| NetworkError::InvalidResponse)?;
    serde_json::from_value(value).map_err(|_| NetworkError::InvalidResponse)
}
