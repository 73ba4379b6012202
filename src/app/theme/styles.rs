use eframe::egui;

use crate::app::theme::colors;

/// Install the global light theme once at startup
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = colors::BG;
    visuals.window_fill = colors::CARD_BG;
    visuals.extreme_bg_color = colors::INPUT_BG;
    visuals.selection.bg_fill = colors::ACCENT;
    visuals.hyperlink_color = colors::ACCENT_DARK;
    ctx.set_visuals(visuals);
}
