//! egui Native Desktop App Module
//!
//! This module provides the Benevits desktop client: login, the benevits
//! catalog with debounced search, and the member's unlocked offers.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration wrapper (server URL, API URL joining, session path)
//! - **`network`** - Endpoints, the mock/real `NetworkClient` and connectivity monitor
//! - **`session`** - JWT storage (file-backed or in-memory)
//! - **`security`** - RSA encryption of the login credentials
//! - **`viewmodels`** - Login and benevits state plus their async operations
//! - **`state`** - `AppState`, which owns the runtime and the view-models
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── security.rs     - Credential encryption
//! ├── session.rs      - Token storage
//! ├── types.rs        - App view enum and notices
//! ├── network/        - Endpoints, client, canned data, reachability
//! ├── viewmodels/     - Login and benevits view-models
//! ├── state/          - Application state
//! ├── theme/          - Colors and frame builders
//! └── views/          - Screens
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin benevits_app
//! ```

pub mod config;
pub mod network;
pub mod security;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod viewmodels;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use network::{Endpoint, NetworkClient, NetworkService};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use state::AppState;
pub use types::AppView;
pub use viewmodels::{BenevitsViewModel, LoginViewModel, SearchMode};
