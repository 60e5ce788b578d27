//! Featured-articles panel
//!
//! Wide cards, newest on top, image side alternating left/right.
//! A section selector narrows the list to one page's articles.

use eframe::egui;

use crate::core::card::{Card, CardKind};
use crate::core::layout;

const IMAGE_SIZE: egui::Vec2 = egui::Vec2::new(180.0, 150.0);

/// Featured-article list with page filtering
pub struct FeaturedPanel;

impl FeaturedPanel {
    /// Show the featured panel. The section filter is edited in place;
    /// returns the id of a card whose delete button was clicked.
    pub fn show(
        ui: &mut egui::Ui,
        featured: &[Card],
        page_filter: &mut Option<String>,
    ) -> Option<String> {
        let mut deleted = None;

        ui.horizontal(|ui| {
            ui.heading("Featured Articles");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                Self::show_filter(ui, featured, page_filter);
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("featured_scroll")
            .show(ui, |ui| {
                let plan = layout::render_plan(CardKind::Featured, featured, page_filter.as_deref());
                if plan.is_empty() {
                    ui.label("No featured articles for this page.");
                    return;
                }

                for slot in plan {
                    if Self::show_article(ui, slot.card, slot.image_right) {
                        deleted = Some(slot.card.id.clone());
                    }
                    ui.add_space(8.0);
                }
            });

        deleted
    }

    /// Section selector fed from the tags present in storage
    fn show_filter(ui: &mut egui::Ui, featured: &[Card], page_filter: &mut Option<String>) {
        let mut sections: Vec<String> = featured
            .iter()
            .filter_map(|card| card.webpage.clone())
            .collect();
        sections.sort();
        sections.dedup();

        let selected = page_filter.clone().unwrap_or_else(|| "All pages".to_string());
        egui::ComboBox::from_id_salt("featured_page_filter")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(page_filter, None, "All pages");
                for section in sections {
                    ui.selectable_value(page_filter, Some(section.clone()), section);
                }
            });
        ui.label("Section:");
    }

    /// Draw one featured article. Returns whether its delete button was clicked.
    fn show_article(ui: &mut egui::Ui, card: &Card, image_right: bool) -> bool {
        let mut delete_clicked = false;

        ui.push_id(&card.id, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if !image_right {
                        Self::show_image(ui, card);
                    }
                    ui.vertical(|ui| {
                        ui.strong(&card.title);
                        ui.label(&card.content);
                        ui.weak("Last updated a few minutes ago");
                        ui.horizontal(|ui| {
                            let _ = ui.link("Read more");
                            if ui
                                .button("\u{1F5D1}")
                                .on_hover_text("Delete article")
                                .clicked()
                            {
                                delete_clicked = true;
                            }
                        });
                    });
                    if image_right {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| Self::show_image(ui, card),
                        );
                    }
                });
            });
        });

        delete_clicked
    }

    fn show_image(ui: &mut egui::Ui, card: &Card) {
        ui.add(
            egui::Image::new(card.image_or_placeholder(CardKind::Featured))
                .fit_to_exact_size(IMAGE_SIZE),
        );
    }
}
