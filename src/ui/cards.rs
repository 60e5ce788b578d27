//! Projects panel

use eframe::egui;

use crate::core::card::{Card, CardKind};
use crate::core::layout;

/// Width of one project card, matching the site's three-per-row grid
const CARD_WIDTH: f32 = 300.0;

/// Grid of project cards
pub struct ProjectsPanel;

impl ProjectsPanel {
    /// Show the projects panel. Returns the id of a card whose delete
    /// button was clicked this frame, if any.
    pub fn show(ui: &mut egui::Ui, projects: &[Card]) -> Option<String> {
        let mut deleted = None;

        ui.heading("Projects");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("projects_scroll")
            .show(ui, |ui| {
                if projects.is_empty() {
                    ui.label("No project cards yet.");
                    return;
                }

                ui.horizontal_wrapped(|ui| {
                    for slot in layout::render_plan(CardKind::Project, projects, None) {
                        if Self::show_card(ui, slot.card) {
                            deleted = Some(slot.card.id.clone());
                        }
                    }
                });
            });

        deleted
    }

    /// Draw one project card. Returns whether its delete button was clicked.
    fn show_card(ui: &mut egui::Ui, card: &Card) -> bool {
        let mut delete_clicked = false;

        ui.push_id(&card.id, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.add(
                        egui::Image::new(card.image_or_placeholder(CardKind::Project))
                            .fit_to_exact_size(egui::vec2(CARD_WIDTH, 200.0)),
                    );
                    ui.strong(&card.title);
                    ui.label(&card.content);
                    ui.horizontal(|ui| {
                        let _ = ui.link("Read more");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button("\u{1F5D1}")
                                .on_hover_text("Delete card")
                                .clicked()
                            {
                                delete_clicked = true;
                            }
                        });
                    });
                });
            });
        });

        delete_clicked
    }
}
