//! Librovia Desktop App - Main Entry Point
//!
//! Boots tracing, restores any persisted session, and runs the eframe
//! event loop. Worker-thread results are polled at the top of every frame.

use eframe::egui;
use librovia::app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("librovia=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Librovia",
        options,
        Box::new(|cc| {
            theme::styles::apply(&cc.egui_ctx);
            Ok(Box::new(LibroviaApp::default()))
        }),
    )
}

/// Main application wrapper
struct LibroviaApp {
    state: AppState,
}

impl Default for LibroviaApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for LibroviaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling even without input so background results land.
        ctx.request_repaint();
    }
}
