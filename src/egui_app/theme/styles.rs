//! Theme Styling Functions
//!
//! Frame builders and the global visuals for the Benevits screens.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_LIGHT;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::INPUT_BORDER);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::PRIMARY_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the central content area
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame style for the side menu
pub fn side_menu_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDE_MENU_BG)
        .inner_margin(egui::Margin::symmetric(12, 16))
}

/// Create a frame for a benevit card
pub fn card_frame(is_locked: bool) -> egui::Frame {
    let stroke = if is_locked {
        Stroke::new(1.0, colors::LOCKED_BADGE)
    } else {
        Stroke::new(1.0, colors::CARD_BORDER)
    };

    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
}

/// Small rounded label background
pub fn badge_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Filled brand button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(colors::TEXT_LIGHT).strong())
        .fill(colors::PRIMARY)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6))
}
