//! Network layer
//!
//! [`NetworkService`] is the seam the view-models talk to. [`NetworkClient`]
//! is the production implementation; tests substitute their own.

use std::future::Future;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::shared::error::NetworkError;

pub mod client;
pub mod endpoint;
pub mod mock;
pub mod reachability;

pub use client::NetworkClient;
pub use endpoint::{Endpoint, HttpMethod};
pub use reachability::{NetworkStatus, Reachability};

/// Typed request/response over the member API
pub trait NetworkService: Send + Sync + 'static {
    /// Perform `endpoint` and decode the body into `T`, keeping response headers
    fn request_with_headers<T>(
        &self,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(T, HeaderMap), NetworkError>> + Send
    where
        T: DeserializeOwned + Send + 'static;

    /// Same as [`request_with_headers`](Self::request_with_headers), body only
    fn request<T>(&self, endpoint: Endpoint) -> impl Future<Output = Result<T, NetworkError>> + Send
    where
        T: DeserializeOwned + Send + 'static,
    {
        let response = self.request_with_headers::<T>(endpoint);
        async move { response.await.map(|(data, _)| data) }
    }
}
