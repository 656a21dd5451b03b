//! View-models
//!
//! Cheap-to-clone handles over shared state. The egui views read snapshots
//! every frame and call the async operations on the app's runtime.

pub mod benevits;
pub mod login;

pub use benevits::{BenevitsState, BenevitsViewModel, SearchMode};
pub use login::{LoginState, LoginViewModel};
