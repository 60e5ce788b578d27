//! Cardstock - desktop card manager for a static website
//!
//! Manages the site's project cards and featured articles: add through
//! a modal form, persist locally, preview with switchable themes.

mod app;
mod core;
mod ui;

use app::CardstockApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Cardstock...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Cardstock"),
        ..Default::default()
    };

    eframe::run_native(
        "Cardstock",
        native_options,
        Box::new(|cc| Ok(Box::new(CardstockApp::new(cc)))),
    )
}
