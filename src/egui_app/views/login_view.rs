use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::strings::login;

const FORM_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_LIGHT);

    let login_state = state.login.state();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 360.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new(login::TITLE).size(32.0).strong().color(colors::PRIMARY));
            ui.add_space(6.0);
            ui.label(egui::RichText::new(login::SUBTITLE).size(16.0).color(colors::TEXT_SECONDARY));
            ui.add_space(24.0);

            if let Some(ref error) = login_state.error_message {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            // Username: digits only, 11 max
            let username = ui.add(
                egui::TextEdit::singleline(&mut state.username_input)
                    .hint_text(login::USERNAME_PLACEHOLDER)
                    .desired_width(FORM_WIDTH)
                    .text_color(colors::TEXT_PRIMARY),
            );
            if username.changed() {
                state.on_username_changed();
            }
            if !state.login.is_username_valid() {
                ui.label(egui::RichText::new(login::USERNAME_ERROR).size(12.0).color(colors::ERROR));
            }
            ui.add_space(10.0);

            let password = ui.add(
                egui::TextEdit::singleline(&mut state.password_input)
                    .hint_text(login::PASSWORD_PLACEHOLDER)
                    .password(true)
                    .desired_width(FORM_WIDTH)
                    .text_color(colors::TEXT_PRIMARY),
            );
            if password.changed() {
                state.on_password_changed();
            }
            if !state.login.is_password_valid() {
                ui.label(egui::RichText::new(login::PASSWORD_ERROR).size(12.0).color(colors::ERROR));
            }
            ui.add_space(24.0);

            let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let button = ui.add_enabled(
                state.login.is_login_button_enabled(),
                styles::primary_button(login::BUTTON).min_size(egui::vec2(FORM_WIDTH, 40.0)),
            );

            if button.clicked() || (submitted && state.login.is_login_button_enabled()) {
                state.handle_login();
            }

            if login_state.is_loading {
                ui.add_space(15.0);
                ui.spinner();
            }
        });
    });
}
