use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::views::benevit_card::{self, CardAction};
use crate::egui_app::AppView;
use crate::shared::strings::benevits;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mine = state.benevits.my_benevits();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(benevits::MY_BENEVITS_TITLE).size(22.0).strong().color(colors::TEXT_PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(benevits::MY_BENEVITS_CLOSE).clicked() {
                state.open_view(AppView::Home);
            }
        });
    });
    ui.add_space(12.0);

    if mine.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(egui::RichText::new("🎁").size(40.0));
            ui.label(egui::RichText::new(benevits::MY_BENEVITS_EMPTY_TITLE).size(18.0).strong().color(colors::TEXT_PRIMARY));
            ui.label(egui::RichText::new(benevits::MY_BENEVITS_EMPTY_SUBTITLE).color(colors::TEXT_SECONDARY));
        });
        return;
    }

    let today = chrono::Local::now().date_naive();
    let mut requested = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for benevit in &mine {
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
