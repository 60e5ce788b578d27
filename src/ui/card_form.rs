//! Modal dialog for adding cards
//!
//! One dialog serves both card kinds; whichever "Add" action opened it
//! decides the kind, the heading, and the placeholder texts.

use eframe::egui;

use crate::core::card::{CardDraft, CardKind};

/// Modal add-card dialog
pub struct AddCardDialog {
    visible: bool,
    kind: CardKind,
    title: String,
    content: String,
    image_url: String,
    webpage: String,
}

impl Default for AddCardDialog {
    fn default() -> Self {
        Self {
            visible: false,
            kind: CardKind::Project,
            title: String::new(),
            content: String::new(),
            image_url: String::new(),
            webpage: String::new(),
        }
    }
}

impl AddCardDialog {
    /// Open the dialog for the given card kind
    pub fn open_for(&mut self, kind: CardKind) {
        self.kind = kind;
        self.visible = true;
    }

    /// Close the dialog. Closing an already-closed dialog is a no-op.
    pub fn close(&mut self) {
        self.visible = false;
    }

    fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.image_url.clear();
        self.webpage.clear();
    }

    fn heading(&self) -> &'static str {
        match self.kind {
            CardKind::Project => "Add New Project",
            CardKind::Featured => "Add Featured Article",
        }
    }

    fn title_hint(&self) -> &'static str {
        match self.kind {
            CardKind::Project => "E.g. Laurisilva Project",
            CardKind::Featured => "E.g. Special Article",
        }
    }

    fn content_hint(&self) -> &'static str {
        match self.kind {
            CardKind::Project => "E.g. A short description for this project...",
            CardKind::Featured => "E.g. A wider card with supporting text...",
        }
    }

    /// Show the dialog. Returns the submitted draft, if any.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<(CardKind, CardDraft)> {
        if !self.visible {
            return None;
        }

        let mut submitted = None;
        let mut open = true;
        let title_hint = self.title_hint();
        let content_hint = self.content_hint();

        egui::Window::new(self.heading())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("add_card_fields")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Title:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.title)
                                .hint_text(title_hint)
                                .desired_width(260.0),
                        );
                        ui.end_row();

                        ui.label("Content:");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.content)
                                .hint_text(content_hint)
                                .desired_width(260.0)
                                .desired_rows(4),
                        );
                        ui.end_row();

                        ui.label("Image:");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.image_url)
                                    .hint_text("URL or file, empty for placeholder")
                                    .desired_width(190.0),
                            );
                            if ui.button("Browse...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                                    .pick_file()
                                {
                                    self.image_url = path.display().to_string();
                                }
                            }
                        });
                        ui.end_row();

                        if self.kind == CardKind::Featured {
                            ui.label("Page:");
                            ui.add(
                                egui::TextEdit::singleline(&mut self.webpage)
                                    .hint_text("E.g. empleo.html")
                                    .desired_width(260.0),
                            );
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.close();
                    }
                    if ui.button("Add card").clicked() {
                        submitted = Some((self.kind, self.draft()));
                        self.reset();
                        self.close();
                    }
                });
            });

        if !open {
            self.close();
        }

        submitted
    }

    fn draft(&self) -> CardDraft {
        let webpage = self.webpage.trim();
        CardDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: self.image_url.trim().to_string(),
            webpage: if self.kind == CardKind::Featured && !webpage.is_empty() {
                Some(webpage.to_string())
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_twice_is_a_noop() {
        let mut dialog = AddCardDialog::default();
        dialog.open_for(CardKind::Featured);
        dialog.close();
        dialog.close();
    }

    #[test]
    fn draft_carries_the_page_tag_only_for_featured() {
        let mut dialog = AddCardDialog::default();
        dialog.title = "Title".to_string();
        dialog.webpage = "empleo.html".to_string();

        dialog.kind = CardKind::Project;
        assert_eq!(dialog.draft().webpage, None);

        dialog.kind = CardKind::Featured;
        assert_eq!(dialog.draft().webpage.as_deref(), Some("empleo.html"));
    }

    #[test]
    fn blank_page_field_means_no_tag() {
        let mut dialog = AddCardDialog::default();
        dialog.kind = CardKind::Featured;
        dialog.webpage = "   ".to_string();
        assert_eq!(dialog.draft().webpage, None);
    }
}
