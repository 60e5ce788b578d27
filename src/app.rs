//! Main application state and UI coordination

use std::path::PathBuf;

use eframe::egui;

use crate::core::card::{Card, CardDraft, CardKind};
use crate::core::config::AppConfig;
use crate::core::repo::CardRepository;
use crate::core::store::CardStore;
use crate::core::theme::Theme;
use crate::ui::card_form::AddCardDialog;
use crate::ui::cards::ProjectsPanel;
use crate::ui::featured::FeaturedPanel;
use crate::ui::toast::Toasts;

/// Main application state
pub struct CardstockApp {
    /// Repository for project cards
    projects_repo: CardRepository,
    /// Repository for featured articles
    featured_repo: CardRepository,
    /// Cached project list, reloaded after every mutation
    projects: Vec<Card>,
    /// Cached featured list, reloaded after every mutation
    featured: Vec<Card>,
    /// Active featured-article section filter
    page_filter: Option<String>,
    /// Add-card modal dialog
    add_dialog: AddCardDialog,
    /// Pending notifications
    toasts: Toasts,
    /// Active presentation theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
}

impl CardstockApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Card images load through the egui_extras loaders
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        let store_root = config
            .store_dir
            .clone()
            .or_else(CardStore::default_root)
            .unwrap_or_else(|| PathBuf::from("cards"));
        let store = CardStore::new(store_root);

        let projects_repo = CardRepository::new(store.clone(), CardKind::Project);
        let featured_repo = CardRepository::new(store, CardKind::Featured);

        // Draw existing records from the first frame on
        let projects = projects_repo.load();
        let featured = featured_repo.load();

        let theme = config.ui.theme;
        theme.apply(&cc.egui_ctx);

        Self {
            projects_repo,
            featured_repo,
            projects,
            featured,
            page_filter: config.ui.page_filter.clone(),
            add_dialog: AddCardDialog::default(),
            toasts: Toasts::default(),
            theme,
            config,
        }
    }

    /// Add a card of the given kind from submitted form input
    fn add_card(&mut self, kind: CardKind, draft: CardDraft) {
        let repo = match kind {
            CardKind::Project => &self.projects_repo,
            CardKind::Featured => &self.featured_repo,
        };
        match repo.add(draft) {
            Ok(card) => tracing::info!("Added {}: {}", kind.label(), card.id),
            Err(e) => tracing::error!("Failed to add {}: {}", kind.label(), e),
        }
        self.reload(kind);
    }

    /// Delete a card by id and confirm with a toast
    fn delete_card(&mut self, kind: CardKind, id: &str) {
        let repo = match kind {
            CardKind::Project => &self.projects_repo,
            CardKind::Featured => &self.featured_repo,
        };
        match repo.delete(id) {
            Ok(removed) => {
                if !removed {
                    tracing::debug!("Delete requested for unknown card: {}", id);
                }
                self.toasts.success(match kind {
                    CardKind::Project => "Project deleted.",
                    CardKind::Featured => "Featured article deleted.",
                });
            }
            Err(e) => tracing::error!("Failed to delete {}: {}", kind.label(), e),
        }
        self.reload(kind);
    }

    /// Refresh the cached list for one card kind from storage
    fn reload(&mut self, kind: CardKind) {
        match kind {
            CardKind::Project => self.projects = self.projects_repo.load(),
            CardKind::Featured => self.featured = self.featured_repo.load(),
        }
    }

    /// Switch themes and broadcast the change
    fn select_theme(&mut self, selected: Theme, ctx: &egui::Context) {
        self.theme = self.theme.toggled(selected);
        self.theme.apply(ctx);
        tracing::info!(
            "Theme changed to: {}",
            self.theme.attribute().unwrap_or("default")
        );
        self.config.ui.theme = self.theme;
        self.save_config();
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Cards", |ui| {
                    if ui.button("Add Project...").clicked() {
                        self.add_dialog.open_for(CardKind::Project);
                        ui.close();
                    }
                    if ui.button("Add Featured Article...").clicked() {
                        self.add_dialog.open_for(CardKind::Featured);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Theme", |ui| {
                    for theme in Theme::ALL {
                        if ui
                            .selectable_label(self.theme == theme, theme.label())
                            .clicked()
                        {
                            self.select_theme(theme, ctx);
                            ui.close();
                        }
                    }
                });
            });
        });
    }
}

impl eframe::App for CardstockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && !i.modifiers.shift && i.key_pressed(egui::Key::N) {
                self.add_dialog.open_for(CardKind::Project);
            }
            if i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::N) {
                self.add_dialog.open_for(CardKind::Featured);
            }
        });

        // Render menu bar
        self.render_menu_bar(ctx);

        // Modal add-card dialog
        if let Some((kind, draft)) = self.add_dialog.show(ctx) {
            self.add_card(kind, draft);
        }

        let filter_before = self.page_filter.clone();
        let mut deleted_project = None;
        let mut deleted_featured = None;

        // Render main content area: projects on the left, featured on the right
        egui::CentralPanel::default().show(ctx, |ui| {
            let available_width = ui.available_width();
            ui.horizontal(|ui| {
                ui.set_min_width(available_width);

                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    deleted_project = ProjectsPanel::show(ui, &self.projects);
                });

                ui.separator();

                ui.vertical(|ui| {
                    ui.set_width(available_width / 2.0 - 4.0);
                    deleted_featured =
                        FeaturedPanel::show(ui, &self.featured, &mut self.page_filter);
                });
            });
        });

        if let Some(id) = deleted_project {
            self.delete_card(CardKind::Project, &id);
        }
        if let Some(id) = deleted_featured {
            self.delete_card(CardKind::Featured, &id);
        }

        // Persist a changed section filter
        if self.page_filter != filter_before {
            self.config.ui.page_filter = self.page_filter.clone();
            self.save_config();
        }

        self.toasts.show(ctx);
    }
}
