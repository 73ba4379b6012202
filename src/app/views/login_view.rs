use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 280.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📚 Librovia")
                    .size(32.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Login")
                    .size(22.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .hint_text("you@example.com")
                        .text_color(colors::TEXT_PRIMARY),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_PRIMARY),
                );
            });

            ui.add_space(20.0);

            let login_btn = egui::Button::new(
                egui::RichText::new("Login").color(colors::TEXT_ON_ACCENT),
            )
            .min_size(egui::vec2(160.0, 32.0))
            .fill(colors::ACCENT);

            if ui.add_enabled(!state.auth.loading, login_btn).clicked() {
                state.auth.clear_error();
                state.handle_login();
            }

            if state.auth.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_SECONDARY));
                    ui.spinner();
                });
            }
        });
    });
}
