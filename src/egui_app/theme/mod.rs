//! Theme Module
//!
//! Color scheme and frame builders for the Benevits screens.
//!
//! # Usage
//!
//! ```rust,ignore
//! use benevits::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame(benevit.is_locked).show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, &benevit.name);
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
