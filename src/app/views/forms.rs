use eframe::egui;

use crate::app::catalog::FormMode;
use crate::app::state::AppState;
use crate::app::theme::colors;

/// Render the modal layers: add/edit form, delete confirmation, details
/// popup. Each is an `egui::Window` anchored over the dashboard.
pub fn render(ctx: &egui::Context, state: &mut AppState, manage: bool) {
    if manage {
        book_form(ctx, state);
        delete_confirmation(ctx, state);
    }
    details_popup(ctx, state);
}

fn book_form(ctx: &egui::Context, state: &mut AppState) {
    let Some(mode) = state.catalog.form.clone() else {
        return;
    };
    let title = match mode {
        FormMode::Add => "Add Book",
        FormMode::Edit(_) => "Edit Book",
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(320.0);

            if let Some(ref error) = state.catalog.form_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(6.0);
            }

            form_field(ui, "Title:", &mut state.catalog.draft.title);
            form_field(ui, "Author:", &mut state.catalog.draft.author);
            form_field(ui, "ISBN:", &mut state.catalog.draft.isbn);
            form_field(ui, "Cover URL:", &mut state.catalog.draft.cover_image);

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let label = match (&mode, state.catalog.saving) {
                    (FormMode::Add, false) => "Add",
                    (FormMode::Add, true) => "Adding...",
                    (FormMode::Edit(_), false) => "Save",
                    (FormMode::Edit(_), true) => "Saving...",
                };
                let submit = egui::Button::new(
                    egui::RichText::new(label).color(colors::TEXT_ON_ACCENT),
                )
                .min_size(egui::vec2(120.0, 28.0))
                .fill(colors::ACCENT);
                if ui.add_enabled(!state.catalog.saving, submit).clicked() {
                    state.submit_book_form();
                }

                let cancel = egui::Button::new(
                    egui::RichText::new("Cancel").color(colors::TEXT_ON_ACCENT),
                )
                .min_size(egui::vec2(120.0, 28.0))
                .fill(colors::BUTTON_NEUTRAL);
                if ui.add_enabled(!state.catalog.saving, cancel).clicked() {
                    state.catalog.close_form();
                }
            });

            if state.catalog.saving {
                ui.add_space(6.0);
                ui.spinner();
            }
        });
}

fn form_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [80.0, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [220.0, 26.0],
            egui::TextEdit::singleline(value).text_color(colors::TEXT_PRIMARY),
        );
    });
    ui.add_space(4.0);
}

fn delete_confirmation(ctx: &egui::Context, state: &mut AppState) {
    let Some(book) = state.catalog.pending_delete.clone() else {
        return;
    };

    egui::Window::new("Delete Book")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(300.0);
            let title = if book.title.is_empty() {
                book.display_key()
            } else {
                book.title.as_str()
            };
            ui.label(
                egui::RichText::new(format!("Delete \"{}\"?", title))
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new("This removes the book from the catalog.")
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let delete = egui::Button::new(
                    egui::RichText::new(if state.catalog.deleting {
                        "Deleting..."
                    } else {
                        "Delete"
                    })
                    .color(colors::TEXT_ON_ACCENT),
                )
                .min_size(egui::vec2(110.0, 28.0))
                .fill(colors::ERROR);
                if ui.add_enabled(!state.catalog.deleting, delete).clicked() {
                    state.confirm_delete();
                }

                let cancel = egui::Button::new(
                    egui::RichText::new("Cancel").color(colors::TEXT_ON_ACCENT),
                )
                .min_size(egui::vec2(110.0, 28.0))
                .fill(colors::BUTTON_NEUTRAL);
                if ui.add_enabled(!state.catalog.deleting, cancel).clicked() {
                    state.cancel_delete();
                }
            });

            if state.catalog.deleting {
                ui.add_space(6.0);
                ui.spinner();
            }
        });
}

fn details_popup(ctx: &egui::Context, state: &mut AppState) {
    let Some(book) = state.details.clone() else {
        return;
    };

    egui::Window::new("Book Details")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(300.0);
            let title = if book.title.is_empty() {
                "Untitled"
            } else {
                book.title.as_str()
            };
            ui.label(
                egui::RichText::new(title)
                    .size(18.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            let author = if book.author.is_empty() {
                "Unknown"
            } else {
                book.author.as_str()
            };
            ui.label(egui::RichText::new(format!("By {}", author)).color(colors::TEXT_SECONDARY));
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("ISBN: {}", book.display_key()))
                    .color(colors::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{} available",
                    book.available_books.unwrap_or(0)
                ))
                .color(colors::AVAILABLE),
            );
            if let Some(ref cover) = book.cover_image {
                ui.label(egui::RichText::new(cover).size(11.0).color(colors::TEXT_MUTED));
            } else {
                ui.label(egui::RichText::new("No cover image").size(11.0).color(colors::TEXT_MUTED));
            }

            ui.add_space(10.0);
            if ui.button("Close").clicked() {
                state.details = None;
            }
        });
}
