//! Central Application State
//!
//! One mutable state value owns everything the views render. Network work
//! runs on spawned worker threads and reports back over `mpsc` channels
//! that [`AppState::poll`] drains once per frame, so the UI never blocks.
//!
//! Requests are not cancelled or deduplicated: starting a new fetch
//! replaces the pending receiver, orphaning the previous worker, whose send
//! fails silently. Overlapping fetches are therefore last-write-wins on the
//! book list.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use tracing::{info, warn};

use crate::app::api::ApiClient;
use crate::app::auth::{self, AuthState};
use crate::app::catalog::{CatalogState, FormMode};
use crate::app::config::Config;
use crate::app::error::ApiError;
use crate::app::session::{Session, SessionStore};
use crate::app::types::{AppView, Book, User};

type AuthResult = Result<(Option<String>, User), String>;
type BooksResult = Result<Vec<Book>, ApiError>;
type MutationResult = Result<(), String>;

/// Central application state shared across the views
pub struct AppState {
    pub config: Config,
    pub session_store: SessionStore,
    pub api: Arc<ApiClient>,

    /// In-memory copy of the persisted session; workers still re-read the
    /// store before each privileged request and use this only as fallback
    pub session: Session,
    pub auth: AuthState,
    pub catalog: CatalogState,
    pub current_view: AppView,

    pub email_input: String,
    pub password_input: String,

    /// Book shown in the details popup
    pub details: Option<Book>,

    auth_rx: Option<Receiver<AuthResult>>,
    books_rx: Option<Receiver<BooksResult>>,
    save_rx: Option<Receiver<MutationResult>>,
    delete_rx: Option<Receiver<MutationResult>>,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::with_parts(Config::new(), SessionStore::new());
        state.restore_session();
        state
    }

    /// Build the state from explicit parts (tests, alternate profiles)
    pub fn with_parts(config: Config, session_store: SessionStore) -> Self {
        let api = ApiClient::new(config.clone()).expect("HTTP client construction is valid");

        Self {
            config,
            session_store,
            api: Arc::new(api),
            session: Session::default(),
            auth: AuthState::new(),
            catalog: CatalogState::new(),
            current_view: AppView::Login,
            email_input: String::new(),
            password_input: String::new(),
            details: None,
            auth_rx: None,
            books_rx: None,
            save_rx: None,
            delete_rx: None,
        }
    }

    /// A persisted session skips the login screen and lands on the role
    /// dashboard with a fresh fetch in flight.
    pub fn restore_session(&mut self) {
        let session = self.session_store.load();
        if let Some(user) = session.user.clone() {
            info!("restored session for {}", user.display_name());
            self.auth.authenticated = true;
            self.auth.user = Some(user.clone());
            self.current_view = Self::dashboard_for(&user);
            self.session = session;
            self.fetch_books();
        }
    }

    /// Drain every pending worker result. Called once per frame.
    pub fn poll(&mut self) {
        self.check_auth_result();
        self.check_books_result();
        self.check_save_result();
        self.check_delete_result();
    }

    fn dashboard_for(user: &User) -> AppView {
        if user.is_librarian() {
            AppView::AdminDashboard
        } else {
            AppView::UserDashboard
        }
    }

    /// True when the signed-in user may add/edit/delete books
    pub fn can_manage_books(&self) -> bool {
        self.session.is_librarian()
    }

    // ---- auth flow ----

    pub fn handle_login(&mut self) {
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth.set_error("Please fill in all fields".to_string());
            return;
        }

        self.auth.loading = true;
        self.auth.error = None;

        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let api = Arc::clone(&self.api);

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = auth::login(&api, &email, &password).map_err(|err| err.user_message());
            let _ = tx.send(result);
        });

        self.auth_rx = Some(rx);
    }

    fn check_auth_result(&mut self) {
        let Some(result) = self.auth_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        self.auth_rx = None;
        self.auth.loading = false;

        match result {
            Ok((token, user)) => {
                info!("authenticated as {}", user.display_name());
                // Persistence is best-effort; the user stays logged in for
                // this run even if the write failed.
                self.session_store.save(token.as_deref(), &user);
                self.session = Session {
                    token,
                    user: Some(user.clone()),
                };
                self.auth.authenticated = true;
                self.auth.user = Some(user.clone());
                self.auth.error = None;
                self.password_input.clear();
                self.current_view = Self::dashboard_for(&user);
                self.fetch_books();
            }
            Err(message) => {
                warn!("login failed: {}", message);
                self.auth.set_error(message);
            }
        }
    }

    pub fn logout(&mut self) {
        self.session_store.clear();
        self.session = Session::default();
        self.auth = AuthState::new();
        self.catalog = CatalogState::new();
        self.details = None;
        self.current_view = AppView::Login;
        self.email_input.clear();
        self.password_input.clear();
        self.auth_rx = None;
        self.books_rx = None;
        self.save_rx = None;
        self.delete_rx = None;
    }

    // ---- catalog sync ----

    /// Replace the book list wholesale from the server. The worker re-reads
    /// the session store so a token written by a prior session (or another
    /// login flow) is picked up; the in-memory token is only a fallback.
    pub fn fetch_books(&mut self) {
        self.catalog.loading = true;
        self.catalog.notice = None;

        let api = Arc::clone(&self.api);
        let store = self.session_store.clone();
        let fallback_token = self.session.token.clone();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let token = store.load().token.or(fallback_token);
            let result = api.fetch_books(token.as_deref());
            let _ = tx.send(result);
        });

        self.books_rx = Some(rx);
    }

    fn check_books_result(&mut self) {
        let Some(result) = self.books_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        self.books_rx = None;
        self.catalog.loading = false;

        match result {
            Ok(books) => {
                self.catalog.books = books;
                self.catalog.last_refresh =
                    Some(chrono::Local::now().format("%H:%M:%S").to_string());
            }
            Err(err) => {
                warn!("failed to fetch books: {}", err);
                self.catalog.books = Vec::new();
                if err.is_access_denied() {
                    self.catalog.notice =
                        Some("Access denied: you are not authorized to fetch books.".to_string());
                }
            }
        }
    }

    // ---- mutations ----

    /// Submit the add/edit form. The non-empty gate runs before any network
    /// call; on failure the form stays open with the draft intact.
    pub fn submit_book_form(&mut self) {
        if self.catalog.saving {
            return;
        }
        let Some(mode) = self.catalog.form.clone() else {
            return;
        };

        if let Err(err) = self.catalog.draft.validate() {
            self.catalog.form_error = Some(err.user_message());
            return;
        }

        self.catalog.saving = true;
        self.catalog.form_error = None;

        let payload = self.catalog.draft.to_payload();
        let api = Arc::clone(&self.api);
        let store = self.session_store.clone();
        let fallback_token = self.session.token.clone();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let token = store.load().token.or(fallback_token);
            let result = match &mode {
                FormMode::Add => api.add_book(token.as_deref(), &payload),
                FormMode::Edit(id) => api.update_book(token.as_deref(), id, &payload),
            };
            let _ = tx.send(result.map_err(|err| err.user_message()));
        });

        self.save_rx = Some(rx);
    }

    fn check_save_result(&mut self) {
        let Some(result) = self.save_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        self.save_rx = None;
        self.catalog.saving = false;

        match result {
            Ok(()) => {
                self.catalog.close_form();
                self.fetch_books();
            }
            Err(message) => {
                warn!("saving book failed: {}", message);
                self.catalog.form_error = Some(message);
            }
        }
    }

    /// First step of deletion: ask for confirmation
    pub fn request_delete(&mut self, book: Book) {
        if !self.catalog.deleting {
            self.catalog.pending_delete = Some(book);
        }
    }

    pub fn cancel_delete(&mut self) {
        if !self.catalog.deleting {
            self.catalog.pending_delete = None;
        }
    }

    /// Second step: fire the DELETE for the confirmed book
    pub fn confirm_delete(&mut self) {
        if self.catalog.deleting {
            return;
        }
        let Some(book) = self.catalog.pending_delete.clone() else {
            return;
        };
        let Some(id) = book.server_id().map(str::to_string) else {
            self.catalog.pending_delete = None;
            self.catalog.notice = Some("This book has no identifier to delete by.".to_string());
            return;
        };

        self.catalog.deleting = true;

        let api = Arc::clone(&self.api);
        let store = self.session_store.clone();
        let fallback_token = self.session.token.clone();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let token = store.load().token.or(fallback_token);
            let result = api.delete_book(token.as_deref(), &id);
            let _ = tx.send(result.map_err(|err| err.user_message()));
        });

        self.delete_rx = Some(rx);
    }

    fn check_delete_result(&mut self) {
        let Some(result) = self.delete_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        self.delete_rx = None;
        self.catalog.deleting = false;
        self.catalog.pending_delete = None;

        match result {
            Ok(()) => self.fetch_books(),
            Err(message) => {
                warn!("deleting book failed: {}", message);
                self.catalog.notice = Some(message);
            }
        }
    }
}
