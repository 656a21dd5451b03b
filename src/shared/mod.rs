//! Shared Module
//!
//! Platform-agnostic types: the catalog wire format, authentication bodies,
//! error taxonomy, configuration and user-facing copy. Nothing in here does
//! I/O except reading a config file on request.

/// Benevit and Ally catalog types
pub mod benevit;

/// Login and search request/response bodies
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Localized user-facing strings
pub mod strings;

/// Re-export commonly used types for convenience
pub use benevit::{Ally, Benevit, BenevitsResponse, SearchResponse};
pub use auth::{EmptyResponse, LoginRequest, SearchRequest};
pub use error::{EncryptionError, NetworkError, SessionError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
