use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;
use crate::shared::strings::home;

fn menu_item(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
    let text = egui::RichText::new(label).size(16.0).color(colors::TEXT_LIGHT);
    let fill = if selected { colors::SIDE_MENU_HOVER } else { colors::SIDE_MENU_BG };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(ui.available_width(), 36.0)),
    )
    .clicked()
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(title.to_uppercase()).size(11.0).color(colors::STATUS_OFFLINE));
    ui.add_space(4.0);
}

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("side_menu")
        .frame(styles::side_menu_frame())
        .exact_width(220.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(home::TITLE).size(22.0).strong().color(colors::PRIMARY));

            section(ui, home::MENU_SECTION_MAIN);
            if menu_item(ui, &format!("🏠 {}", home::MENU_HOME), state.current_view == AppView::Home) {
                state.open_view(AppView::Home);
            }
            if menu_item(ui, &format!("🎁 {}", home::MENU_MY_BENEVITS), state.current_view == AppView::MyBenevits) {
                state.open_view(AppView::MyBenevits);
            }

            section(ui, home::MENU_SECTION_ACCOUNT);
            if menu_item(ui, &format!("🚪 {}", home::MENU_LOGOUT), false) {
                state.request_logout();
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.label(egui::RichText::new(home::MENU_FOOTER).size(11.0).color(colors::STATUS_OFFLINE));
            });
        });
}
