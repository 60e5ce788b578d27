//! Visual themes for the card preview surface

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Available presentation themes.
///
/// Selection is exclusive: picking a theme deselects the others, and
/// picking the active theme again returns to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Accessible,
    HighContrast,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Default,
        Theme::Dark,
        Theme::Accessible,
        Theme::HighContrast,
    ];

    /// The document-attribute tag for this theme; the default theme
    /// carries no tag at all
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            Theme::Default => None,
            Theme::Dark => Some("dark"),
            Theme::Accessible => Some("accessible"),
            Theme::HighContrast => Some("high-contrast"),
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Dark => "Dark",
            Theme::Accessible => "Accessible",
            Theme::HighContrast => "High contrast",
        }
    }

    /// The theme resulting from selecting `selected` while this theme
    /// is active. Re-selecting the active theme switches back to the
    /// default.
    pub fn toggled(self, selected: Theme) -> Theme {
        if self == selected {
            Theme::Default
        } else {
            selected
        }
    }

    /// Build the widget styling for this theme
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Default => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
            Theme::Accessible => {
                let mut visuals = egui::Visuals::light();
                visuals.override_text_color = Some(egui::Color32::from_rgb(20, 20, 20));
                visuals.widgets.noninteractive.fg_stroke.width = 1.5;
                visuals.widgets.inactive.fg_stroke.width = 1.5;
                visuals.selection.stroke.width = 2.0;
                visuals.hyperlink_color = egui::Color32::from_rgb(0, 80, 160);
                visuals
            }
            Theme::HighContrast => {
                let mut visuals = egui::Visuals::dark();
                visuals.override_text_color = Some(egui::Color32::WHITE);
                visuals.panel_fill = egui::Color32::BLACK;
                visuals.window_fill = egui::Color32::BLACK;
                visuals.extreme_bg_color = egui::Color32::BLACK;
                visuals.widgets.noninteractive.bg_fill = egui::Color32::BLACK;
                visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::WHITE;
                visuals.widgets.inactive.fg_stroke.color = egui::Color32::WHITE;
                visuals.selection.bg_fill = egui::Color32::YELLOW;
                visuals.selection.stroke.color = egui::Color32::BLACK;
                visuals.hyperlink_color = egui::Color32::YELLOW;
                visuals
            }
        }
    }

    /// Restyle the whole context with this theme
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
    }
}
