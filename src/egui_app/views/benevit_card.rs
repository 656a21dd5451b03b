//! One catalog entry

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::benevit::Benevit;
use crate::shared::strings::home;

/// What the member did with a card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    Request,
}

pub fn render(ui: &mut egui::Ui, benevit: &Benevit, today: chrono::NaiveDate) -> CardAction {
    let mut action = CardAction::None;

    styles::card_frame(benevit.is_locked).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            if benevit.is_locked {
                styles::badge_frame(colors::LOCKED_BADGE).show(ui, |ui| {
                    ui.label(egui::RichText::new(format!("🔒 {}", home::LOCKED)).size(11.0).color(colors::TEXT_LIGHT));
                });
            } else if let Some(ally) = &benevit.ally {
                styles::badge_frame(colors::ALLY_BADGE).show(ui, |ui| {
                    ui.label(egui::RichText::new(&ally.name).size(11.0).color(colors::TEXT_LIGHT));
                });
            }

            if let Some(category) = &benevit.category {
                ui.label(egui::RichText::new(category).size(11.0).color(colors::TEXT_SECONDARY));
            }
        });

        ui.add_space(4.0);
        ui.label(egui::RichText::new(&benevit.name).size(17.0).strong().color(colors::TEXT_PRIMARY));

        if let Some(description) = &benevit.description {
            ui.label(egui::RichText::new(description).color(colors::TEXT_SECONDARY));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if let Some(date) = benevit.expiration() {
                let color = if benevit.is_expired(today) { colors::ERROR } else { colors::TEXT_SECONDARY };
                ui.label(egui::RichText::new(format!("Vigencia: {}", date.format("%d/%m/%Y"))).size(12.0).color(color));
            }

            if !benevit.is_locked {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(styles::primary_button(home::REQUEST)).clicked() {
                        action = CardAction::Request;
                    }
                });
            }
        });
    });

    action
}
