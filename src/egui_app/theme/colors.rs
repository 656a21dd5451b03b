//! Color Constants for the Benevits Theme
//!
//! Brand red on a light background, with a dark top bar and side menu.

use eframe::egui::Color32;

/// Brand red
pub const PRIMARY: Color32 = Color32::from_rgb(0xEC, 0x50, 0x56);

/// Brand red, pressed/hovered
pub const PRIMARY_HOVER: Color32 = Color32::from_rgb(0xD4, 0x3E, 0x44);

/// Main background
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF7);

/// Card background
pub const CARD_BG: Color32 = Color32::WHITE;

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE4);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0xEC, 0x50, 0x56);

/// Side menu background
pub const SIDE_MENU_BG: Color32 = Color32::from_rgb(0x2B, 0x2D, 0x42);

/// Side menu hovered item
pub const SIDE_MENU_HOVER: Color32 = Color32::from_rgb(0x3C, 0x3F, 0x5C);

/// Input background
pub const INPUT_BG: Color32 = Color32::WHITE;

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xC8, 0xC8, 0xCE);

/// Text on dark or red backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x22, 0x2A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6E, 0x6E, 0x78);

/// Locked badge background
pub const LOCKED_BADGE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Ally badge background
pub const ALLY_BADGE: Color32 = Color32::from_rgb(0x2B, 0x2D, 0x42);

/// Online status indicator - Green
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Offline status indicator - Gray
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xEA);
