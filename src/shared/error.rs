//! Shared Error Types
//!
//! This module defines the error taxonomy surfaced by the network layer and
//! the two local collaborators it depends on (session store, credential
//! encryption).
//!
//! # Error Categories
//!
//! - `NetworkError` - every failure a request can end in, mock or real
//! - `SessionError` - token store I/O and serialization failures
//! - `EncryptionError` - public key parsing and RSA encryption failures
//!
//! # Usage
//!
//! ```rust
//! use benevits::shared::error::NetworkError;
//!
//! let error = NetworkError::ServerError(503);
//! assert_eq!(error.to_string(), "Error del servidor (código: 503)");
//! ```
//!
//! The `Display` output of `NetworkError` is the localized description shown
//! to the member; `recovery_suggestion` gives the follow-up line.
use thiserror::Error;

/// Failures a request can end in
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The endpoint URL could not be built
    #[error("La URL es inválida")]
    InvalidUrl,

    /// The response (or a canned mock payload) did not match what the caller expected
    #[error("Respuesta del servidor inválida")]
    InvalidResponse,

    /// HTTP 401, or unknown mock credentials
    #[error("Usuario o contraseña incorrectos")]
    Unauthorized,

    /// Any non-2xx status other than 401
    #[error("Error del servidor (código: {0})")]
    ServerError(u16),

    /// A 2xx body that could not be decoded into the response type
    #[error("Error al procesar la respuesta")]
    DecodingError,

    /// Connectivity is down, or the transport could not connect
    #[error("No hay conexión a internet")]
    NoInternetConnection,

    /// The request took longer than the transport allows
    #[error("La solicitud tardó demasiado tiempo")]
    Timeout,

    /// Anything else the transport reported
    #[error("Error: {0}")]
    Unknown(String),
}

impl NetworkError {
    /// Follow-up line shown under the error description
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Verifica tus credenciales e intenta de nuevo",
            Self::NoInternetConnection => "Verifica tu conexión a internet",
            Self::Timeout => "Intenta de nuevo más tarde",
            Self::ServerError(_) => "Intenta de nuevo en unos momentos",
            _ => "Por favor intenta de nuevo",
        }
    }

    /// Create an unknown error from any displayable source
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::NoInternetConnection
        } else if err.is_builder() {
            Self::InvalidUrl
        } else if err.is_decode() {
            Self::DecodingError
        } else {
            Self::unknown(err.to_string())
        }
    }
}

/// Token store failures
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the backing file failed
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file held something other than a key/value map
    #[error("Session storage is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// No platform data directory could be resolved
    #[error("No data directory available for session storage")]
    NoDataDir,
}

/// Credential encryption failures
#[derive(Debug, Error)]
pub enum EncryptionError {
    /// The PEM block could not be parsed into an RSA public key
    #[error("Invalid public key: {0}")]
    InvalidKey(String),

    /// The RSA operation itself failed (e.g. message too long for the key)
    #[error("Encryption failed: {0}")]
    Encrypt(#[from] rsa::Error),
}
