//! Scriptable network service for view-model tests
//!
//! Answers from JSON payloads registered per endpoint path, or fails every
//! call with a configured error. Every call is recorded.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use benevits::egui_app::{Endpoint, NetworkService};
use benevits::shared::error::NetworkError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::fixtures::TEST_TOKEN;

pub struct MockNetworkService {
    responses: Mutex<HashMap<&'static str, serde_json::Value>>,
    error: Mutex<Option<NetworkError>>,
    headers: Mutex<HeaderMap>,
    delay: Duration,
    calls: Mutex<Vec<Endpoint>>,
}

impl Default for MockNetworkService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNetworkService {
    /// Succeeds with `Authorization: Bearer test-token-12345` and no payloads
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", TEST_TOKEN)).unwrap());

        Self {
            responses: Mutex::new(HashMap::new()),
            error: Mutex::new(None),
            headers: Mutex::new(headers),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Answer `endpoint`'s path with `payload`
    pub fn with_response(self, endpoint: &Endpoint, payload: impl Serialize) -> Self {
        self.set_response(endpoint, payload);
        self
    }

    pub fn with_error(self, error: NetworkError) -> Self {
        self.set_error(Some(error));
        self
    }

    pub fn with_headers(self, headers: HeaderMap) -> Self {
        *self.headers.lock().unwrap() = headers;
        self
    }

    pub fn set_response(&self, endpoint: &Endpoint, payload: impl Serialize) {
        let value = serde_json::to_value(payload).unwrap();
        self.responses.lock().unwrap().insert(endpoint.path(), value);
    }

    pub fn set_error(&self, error: Option<NetworkError>) {
        *self.error.lock().unwrap() = error;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Calls made to the endpoint sharing `endpoint`'s path
    pub fn calls_to(&self, endpoint: &Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.path() == endpoint.path())
            .count()
    }

    pub fn last_endpoint(&self) -> Option<Endpoint> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl NetworkService for MockNetworkService {
    fn request_with_headers<T>(
        &self,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(T, HeaderMap), NetworkError>> + Send
    where
        T: DeserializeOwned + Send + 'static,
    {
        let outcome = match self.error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => self
                .responses
                .lock()
                .unwrap()
                .get(endpoint.path())
                .cloned()
                .ok_or(NetworkError::InvalidResponse),
        };
        let headers = self.headers.lock().unwrap().clone();
        let delay = self.delay;
        self.calls.lock().unwrap().push(endpoint);

        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let value = outcome?;
            let data = serde_json::from_value(value).map_err(|_| NetworkError::InvalidResponse)?;
            Ok((data, headers))
        }
    }
}
