//! Librovia - Library Catalog Client
//!
//! Librovia is a native desktop client for a library-book catalog backed by
//! a remote HTTP REST API. Users log in with email/password, browse and
//! search the catalog, and librarians manage it (add/edit/delete books).
//!
//! # Overview
//!
//! The client is a thin presentation layer over the REST API:
//! - Authentication with a durable token/user cache across restarts
//! - Wholesale catalog fetch with local text search filtering
//! - Create/update/delete for librarians, resynced after every mutation
//!
//! # Module Structure
//!
//! Everything lives under the `app` module:
//!
//! - **`config`** - Base-URL resolution and runtime configuration
//! - **`api`** - HTTP client for the catalog backend
//! - **`session`** - Durable token/user storage
//! - **`auth`** - Authentication state and login flow
//! - **`catalog`** - Book list state, filtering, and form drafts
//! - **`state`** - Central application state driving the views
//! - **`views`** - egui screens (login, user/admin dashboards)
//! - **`theme`** - Color constants and global styling
//!
//! # Usage
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin librovia
//! ```
//!
//! # Concurrency
//!
//! egui is a single-threaded immediate mode GUI; every network call runs on
//! a spawned worker thread and reports back over an `mpsc` channel that the
//! frame loop polls. The UI stays responsive while requests are in flight.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, ApiError>`; errors are converted to
//! user-facing messages at the view boundary and never crash a view.

/// Desktop client application
pub mod app;
