use eframe::egui;

use crate::egui_app::network::NetworkStatus;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;
use crate::shared::strings::home;

pub mod benevit_card;
pub mod home_view;
pub mod login_view;
pub mod my_benevits_view;
pub mod side_menu;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    if state.current_view == AppView::Login {
        return;
    }

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("☰").size(18.0)).clicked() {
                    state.toggle_side_menu();
                }
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(state.current_view.title()).size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(home::LOGOUT_CONFIRM).clicked() {
                        state.request_logout();
                    }

                    ui.add_space(16.0);

                    match state.reachability.status() {
                        NetworkStatus::Online => ui.colored_label(colors::STATUS_ONLINE, "🟢 Online"),
                        NetworkStatus::Offline => ui.colored_label(colors::STATUS_OFFLINE, "🔴 Offline"),
                    };
                });
            });
        });
}

pub fn render_side_menu(ctx: &egui::Context, state: &mut AppState) {
    if state.show_side_menu && state.current_view != AppView::Login {
        side_menu::render(ctx, state);
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = match state.current_view {
        AppView::Login => egui::Frame::default().fill(colors::BG_LIGHT),
        AppView::Home | AppView::MyBenevits => styles::content_frame(),
    };

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
            AppView::MyBenevits => my_benevits_view::render(ui, state),
        });
}

pub fn render_logout_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_logout_confirm {
        return;
    }

    egui::Window::new(home::LOGOUT_ALERT_TITLE)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(home::LOGOUT_ALERT_MESSAGE).color(colors::TEXT_PRIMARY));
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button(home::LOGOUT_CANCEL).clicked() {
                    state.cancel_logout();
                }
                if ui.add(styles::primary_button(home::LOGOUT_CONFIRM)).clicked() {
                    state.logout();
                }
            });
        });
}

pub fn render_notice(ctx: &egui::Context, state: &AppState) {
    let Some(notice) = &state.notice else {
        return;
    };

    egui::Area::new(egui::Id::new("notice"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            styles::badge_frame(colors::SUCCESS).show(ui, |ui| {
                ui.label(egui::RichText::new(&notice.text).size(14.0).color(colors::TEXT_LIGHT));
            });
        });
}
