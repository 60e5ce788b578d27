//! Transient confirmation notifications
//!
//! Toasts stack in the bottom-right corner and dismiss themselves
//! after a fixed delay. Fire-and-forget: once queued, a toast cannot
//! be cancelled.

use std::time::{Duration, Instant};

use eframe::egui;

/// How long a toast stays on screen
const TOAST_DELAY: Duration = Duration::from_secs(3);

struct Toast {
    message: String,
    shown_at: Instant,
}

/// Queue of pending notifications
#[derive(Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    /// Queue a success notification
    pub fn success(&mut self, message: impl Into<String>) {
        self.queue.push(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Draw pending toasts and drop the expired ones
    pub fn show(&mut self, ctx: &egui::Context) {
        self.queue
            .retain(|toast| toast.shown_at.elapsed() < TOAST_DELAY);
        if self.queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.queue {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.strong("Cardstock");
                        ui.label(&toast.message);
                    });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so expiry fires without further input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
