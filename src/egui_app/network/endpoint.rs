//! API endpoints
//!
//! Each variant knows its method, path, headers and JSON body. The Bearer
//! header is attached by the caller-supplied token, so building a request
//! never touches the session store directly.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::shared::auth::{LoginRequest, SearchRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Operations the member API exposes
#[derive(Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `credentials` is the encrypted blob sent on the wire. The raw pair is
    /// kept only for the simulated responder and is never serialized.
    Login {
        credentials: String,
        username: String,
        password: String,
    },
    LandingBenevits,
    SearchBenevits {
        query: String,
    },
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Login { username, .. } => f.debug_struct("Login").field("username", username).finish_non_exhaustive(),
            Endpoint::LandingBenevits => f.write_str("LandingBenevits"),
            Endpoint::SearchBenevits { query } => f.debug_struct("SearchBenevits").field("query", query).finish(),
        }
    }
}

impl Endpoint {
    pub fn login(credentials: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Endpoint::Login {
            credentials: credentials.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Endpoint::SearchBenevits { query: query.into() }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login { .. } => "/api/v2/member/authentication",
            Endpoint::LandingBenevits => "/api/v1/member/landing_benevits",
            Endpoint::SearchBenevits { .. } => "/api/v1/member/member_benevits/search",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Login { .. } | Endpoint::SearchBenevits { .. } => HttpMethod::Post,
            Endpoint::LandingBenevits => HttpMethod::Get,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login { .. })
    }

    /// JSON headers, plus `Authorization: Bearer <token>` on authenticated endpoints
    pub fn headers(&self, token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if self.requires_auth() {
            if let Some(value) = token.and_then(|t| HeaderValue::from_str(&format!("Bearer {}", t)).ok()) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    pub fn body(&self) -> Option<Value> {
        match self {
            Endpoint::Login { credentials, .. } => serde_json::to_value(LoginRequest {
                credentials: credentials.clone(),
            })
            .ok(),
            Endpoint::SearchBenevits { query } => serde_json::to_value(SearchRequest { query: query.clone() }).ok(),
            Endpoint::LandingBenevits => None,
        }
    }
}
