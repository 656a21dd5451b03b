use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::benevit_card::{self, CardAction};
use crate::shared::strings::home;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let snapshot = state.benevits.state();
    let displayed = state.benevits.displayed_benevits();

    ui.label(egui::RichText::new(home::WELCOME).size(22.0).strong().color(colors::TEXT_PRIMARY));
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let search = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text(format!("🔍 {}", home::SEARCH_PLACEHOLDER))
                .desired_width(ui.available_width() - 30.0),
        );
        if search.changed() {
            state.on_search_changed();
        }
        if snapshot.is_searching {
            ui.spinner();
        }
    });
    ui.add_space(12.0);

    if snapshot.is_loading && snapshot.all_benevits.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.spinner();
        });
        return;
    }

    if let Some(error) = &snapshot.error_message {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new(home::ERROR_TITLE).size(18.0).strong().color(colors::TEXT_PRIMARY));
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            if let Some(suggestion) = &snapshot.error_suggestion {
                ui.label(egui::RichText::new(suggestion).color(colors::TEXT_SECONDARY));
            }
            ui.add_space(12.0);
            if ui.add(styles::primary_button(home::RETRY)).clicked() {
                state.retry();
            }
        });
        return;
    }

    if displayed.is_empty() && !state.search_input.trim().is_empty() && !snapshot.is_searching {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new(home::EMPTY_SEARCH_TITLE).size(18.0).strong().color(colors::TEXT_PRIMARY));
            ui.label(egui::RichText::new(home::EMPTY_SEARCH_MESSAGE).color(colors::TEXT_SECONDARY));
        });
        return;
    }

    let today = chrono::Local::now().date_naive();
    let mut requested = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for benevit in &displayed {
            if benevit_card::render(ui, benevit, today) == CardAction::Request {
                requested = Some(benevit.clone());
            }
            ui.add_space(8.0);
        }
    });

    if let Some(benevit) = requested {
        state.request_benevit(&benevit);
    }
}
