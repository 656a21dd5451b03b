//! Benevits - Main Library
//!
//! Client for the Socio Infonavit membership-benefits catalog ("Benevits"):
//! member login with RSA-encrypted credentials, the landing catalog split
//! into locked and unlocked offers, and a debounced search box.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Catalog wire format (`Benevit`, `Ally`, responses)
//!   - Error taxonomy and user-facing copy
//!   - `AppConfig` and its builder
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Network client with a mock/real switch
//!   - Session token store and credential encryption
//!   - Login and benevits view-models
//!   - Screens
//!
//! # Feature Flags
//!
//! - **`mock-data`** (default) - answer every network call from canned data.
//!   Build with `--no-default-features` to talk to the live API.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use benevits::egui_app::{BenevitsViewModel, Config, MemorySessionStore, NetworkClient};
//!
//! # async fn example() -> Result<(), benevits::shared::NetworkError> {
//! let config = Config::new();
//! let network = Arc::new(NetworkClient::new(config.clone(), Arc::new(MemorySessionStore::new()))?);
//! let benevits = BenevitsViewModel::new(network, config.app());
//!
//! benevits.refresh().await;
//! benevits.search_benevits("xbox");
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! View-models are cheap `Clone` handles over `Arc<Mutex<_>>` state. Locks
//! are never held across an `.await`; the egui thread reads snapshots every
//! frame while tokio tasks write results.
//!
//! # Error Handling
//!
//! - `NetworkError` for every request outcome, with localized `Display`
//! - `SessionError`, `EncryptionError` and `ConfigError` for the local collaborators
//! - View-models turn errors into screen copy instead of propagating them

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
