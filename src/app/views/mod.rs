use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::AppView;

pub mod dashboard_view;
pub mod forms;
pub mod login_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::ACCENT_DARK)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_ON_ACCENT,
                    egui::RichText::new("📚 Librovia").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.auth.authenticated {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.auth.user {
                            ui.colored_label(
                                colors::TEXT_ON_ACCENT,
                                user.display_name().to_string(),
                            );
                        }
                        if let Some(ref at) = state.catalog.last_refresh {
                            ui.colored_label(colors::CARD_BORDER, format!("updated {}", at));
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::UserDashboard => dashboard_view::render(ui, state, false),
            AppView::AdminDashboard => {
                let manage = state.can_manage_books();
                dashboard_view::render(ui, state, manage)
            }
        });
}
