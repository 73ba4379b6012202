//! Catalog State and Filtering
//!
//! In-memory book list for the active dashboard plus everything the
//! add/edit/delete forms need. The list is a read-through cache of the
//! server catalog: replaced wholesale on every fetch, never patched in
//! place, and re-fetched after every successful mutation so server-computed
//! fields (availability counts) stay authoritative.

use crate::app::types::{Book, BookDraft};

/// Case-insensitive substring match against title OR author. An empty or
/// whitespace-only query matches everything. Pure; the underlying list is
/// not touched.
pub fn filter_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return books.iter().collect();
    }
    books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
        })
        .collect()
}

/// Which record a submitted form writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Editing the record with this server id
    Edit(String),
}

/// State of the catalog shown by the current dashboard
#[derive(Debug, Default)]
pub struct CatalogState {
    pub books: Vec<Book>,
    pub search: String,
    pub loading: bool,
    /// User-visible notice raised by a failed fetch or delete
    pub notice: Option<String>,
    pub last_refresh: Option<String>,

    /// Add/edit form; `None` while closed
    pub form: Option<FormMode>,
    pub draft: BookDraft,
    pub form_error: Option<String>,
    pub saving: bool,

    /// Book awaiting explicit delete confirmation
    pub pending_delete: Option<Book>,
    pub deleting: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add_form(&mut self) {
        self.form = Some(FormMode::Add);
        self.draft = BookDraft::default();
        self.form_error = None;
    }

    /// Prefill the form from an existing record. Falls back to the isbn
    /// when the server sent no id.
    pub fn open_edit_form(&mut self, book: &Book) {
        if let Some(id) = book.server_id() {
            self.form = Some(FormMode::Edit(id.to_string()));
            self.draft = BookDraft::from_book(book);
            self.form_error = None;
        }
    }

    /// Cancel discards the draft
    pub fn close_form(&mut self) {
        self.form = None;
        self.draft = BookDraft::default();
        self.form_error = None;
    }

    pub fn filtered(&self) -> Vec<&Book> {
        filter_books(&self.books, &self.search)
    }
}
