use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::Book;
use crate::app::views::forms;

const CARD_WIDTH: f32 = 180.0;
const GRID_SPACING: f32 = 12.0;

/// Render the catalog dashboard. `manage` turns on the librarian
/// affordances (add/edit/delete); the role check already happened in the
/// view dispatch, so a plain user never sees them.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, manage: bool) {
    egui::Frame::default()
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            header(ui, state, manage);
            ui.add_space(8.0);
            notice_banner(ui, state);

            if state.catalog.loading {
                loading_box(ui);
            } else {
                book_grid(ui, state, manage);
            }
        });

    forms::render(ui.ctx(), state, manage);
}

fn header(ui: &mut egui::Ui, state: &mut AppState, manage: bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Books")
                .size(22.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if manage {
                let add_btn = egui::Button::new(
                    egui::RichText::new("＋ Add Book").color(colors::TEXT_ON_ACCENT),
                )
                .fill(colors::ACCENT);
                if ui.add(add_btn).clicked() {
                    state.catalog.open_add_form();
                }
                ui.add_space(8.0);
            }

            ui.add_sized(
                [240.0, 26.0],
                egui::TextEdit::singleline(&mut state.catalog.search)
                    .hint_text("Search books...")
                    .text_color(colors::TEXT_PRIMARY),
            );
        });
    });
}

fn notice_banner(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(notice) = state.catalog.notice.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(notice).color(colors::ERROR));
        if ui.small_button("Dismiss").clicked() {
            state.catalog.notice = None;
        }
    });
    ui.add_space(8.0);
}

fn loading_box(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.spinner();
        ui.label(egui::RichText::new("Loading books...").color(colors::TEXT_SECONDARY));
    });
}

fn book_grid(ui: &mut egui::Ui, state: &mut AppState, manage: bool) {
    // Clone the filtered view so card buttons can borrow the state mutably.
    let books: Vec<Book> = state
        .catalog
        .filtered()
        .into_iter()
        .cloned()
        .collect();

    if books.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new("No books found.").color(colors::TEXT_SECONDARY));
        });
        return;
    }

    let columns = grid_columns(ui.available_width());

    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in books.chunks(columns) {
            ui.horizontal(|ui| {
                for book in row {
                    book_card(ui, state, book, manage);
                    ui.add_space(GRID_SPACING);
                }
            });
            ui.add_space(GRID_SPACING);
        }
    });
}

/// Columns that fit the viewport, never fewer than one
fn grid_columns(available_width: f32) -> usize {
    (((available_width + GRID_SPACING) / (CARD_WIDTH + GRID_SPACING)).floor() as usize).max(1)
}

fn book_card(ui: &mut egui::Ui, state: &mut AppState, book: &Book, manage: bool) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH - 24.0);
            ui.vertical(|ui| {
                let title = if book.title.is_empty() {
                    "Untitled"
                } else {
                    book.title.as_str()
                };
                if ui
                    .link(egui::RichText::new(title).strong().color(colors::TEXT_PRIMARY))
                    .clicked()
                {
                    state.details = Some(book.clone());
                }

                let author = if book.author.is_empty() {
                    "Unknown"
                } else {
                    book.author.as_str()
                };
                ui.label(
                    egui::RichText::new(format!("By {}", author))
                        .size(12.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.label(
                    egui::RichText::new(format!("ISBN: {}", book.display_key()))
                        .size(11.0)
                        .color(colors::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{} available",
                        book.available_books.unwrap_or(0)
                    ))
                    .size(11.0)
                    .color(colors::AVAILABLE),
                );

                if manage {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.small_button("Edit").clicked() {
                            state.catalog.open_edit_form(book);
                        }
                        if ui
                            .small_button(egui::RichText::new("Delete").color(colors::ERROR))
                            .clicked()
                        {
                            state.request_delete(book.clone());
                        }
                    });
                }
            });
        });
}
