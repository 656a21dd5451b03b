//! Authentication wire types
//!
//! The login endpoint takes an encrypted credential blob and answers with a
//! small acknowledgement body; the session token itself comes back in the
//! response headers.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v2/member/authentication`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Base64 of the RSA-encrypted `username:password` string
    pub credentials: String,
}

/// Body of `POST /api/v1/member/member_benevits/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Acknowledgement returned by endpoints that carry no payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EmptyResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: Some(message.into()),
        }
    }
}
