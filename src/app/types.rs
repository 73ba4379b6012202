//! Wire Types
//!
//! Types exchanged with the catalog API plus the app view enum. Decoding is
//! deliberately tolerant: the backend has been observed to omit fields and
//! to use `_id`/`quantity` spellings, so everything optional defaults
//! instead of failing the whole response.

use serde::{Deserialize, Serialize};

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Read-only catalog for regular users
    UserDashboard,
    /// Catalog with add/edit/delete for librarians
    AdminDashboard,
}

/// User record returned by the login endpoint and persisted locally
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Role comparison is case-insensitive; the backend has returned both
    /// "librarian" and "Librarian".
    pub fn is_librarian(&self) -> bool {
        self.role
            .as_deref()
            .map(|role| role.trim().eq_ignore_ascii_case("librarian"))
            .unwrap_or(false)
    }

    /// Short label for the top bar
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("user")
    }
}

/// A catalog entry. The isbn is the identifying key for display; the server
/// id (when present) addresses the record in mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(default, rename = "availableBooks", alias = "quantity")]
    pub available_books: Option<u32>,
}

impl Book {
    /// Key used for list identity in the UI: isbn, then server id
    pub fn display_key(&self) -> &str {
        self.isbn
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("-")
    }

    /// Identifier the server addresses this record by: id, then isbn
    pub fn server_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.isbn.as_deref())
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. `user` missing on a 2xx means the login was not accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shape used by the backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// The book list arrives as a bare array, `{books: [...]}`, or
/// `{data: [...]}` depending on the endpoint version. This is the single
/// place that leniency lives; everything downstream sees `Vec<Book>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookListPayload {
    Bare(Vec<Book>),
    Wrapped { books: Vec<Book> },
    Data { data: Vec<Book> },
}

impl BookListPayload {
    pub fn into_books(self) -> Vec<Book> {
        match self {
            Self::Bare(books) | Self::Wrapped { books } | Self::Data { data: books } => books,
        }
    }
}

/// Body for creating or replacing a book
#[derive(Debug, Clone, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// Draft state of the add/edit form; discarded on cancel or successful
/// submit, kept intact on failure.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub cover_image: String,
}

impl BookDraft {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone().unwrap_or_default(),
            cover_image: book.cover_image.clone().unwrap_or_default(),
        }
    }

    /// Client-side gate, independent of server validation: title, author
    /// and isbn must all be non-empty before any network call.
    pub fn validate(&self) -> Result<(), crate::app::error::ApiError> {
        if self.title.trim().is_empty()
            || self.author.trim().is_empty()
            || self.isbn.trim().is_empty()
        {
            return Err(crate::app::error::ApiError::validation(
                "Please fill all fields",
            ));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> BookPayload {
        let cover = self.cover_image.trim();
        BookPayload {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            cover_image: if cover.is_empty() {
                None
            } else {
                Some(cover.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_librarian_case_insensitive() {
        let user = User {
            role: Some("Librarian".to_string()),
            ..User::default()
        };
        assert!(user.is_librarian());

        let user = User {
            role: Some("LIBRARIAN".to_string()),
            ..User::default()
        };
        assert!(user.is_librarian());

        let user = User {
            role: Some("member".to_string()),
            ..User::default()
        };
        assert!(!user.is_librarian());

        assert!(!User::default().is_librarian());
    }

    #[test]
    fn test_book_tolerant_decoding() {
        let book: Book = serde_json::from_str(
            r#"{"_id":"abc","title":"Dune","author":"Frank Herbert","quantity":3}"#,
        )
        .unwrap();
        assert_eq!(book.id.as_deref(), Some("abc"));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.available_books, Some(3));
        assert_eq!(book.isbn, None);
        assert_eq!(book.display_key(), "abc");
    }

    #[test]
    fn test_book_identity_prefers_isbn_for_display() {
        let book: Book = serde_json::from_str(
            r#"{"id":"abc","isbn":"978-0441013593","title":"Dune","author":"Frank Herbert"}"#,
        )
        .unwrap();
        assert_eq!(book.display_key(), "978-0441013593");
        assert_eq!(book.server_id(), Some("abc"));
    }

    #[test]
    fn test_book_server_id_falls_back_to_isbn() {
        let book = Book {
            isbn: Some("123".to_string()),
            ..Book::default()
        };
        assert_eq!(book.server_id(), Some("123"));
        assert_eq!(Book::default().server_id(), None);
    }

    #[test]
    fn test_book_list_payload_shapes() {
        let bare: BookListPayload =
            serde_json::from_str(r#"[{"title":"A","author":"B","isbn":"1"}]"#).unwrap();
        assert_eq!(bare.into_books().len(), 1);

        let wrapped: BookListPayload =
            serde_json::from_str(r#"{"books":[{"title":"A","author":"B","isbn":"1"}]}"#).unwrap();
        assert_eq!(wrapped.into_books().len(), 1);

        let data: BookListPayload =
            serde_json::from_str(r#"{"data":[{"title":"A","author":"B","isbn":"1"}]}"#).unwrap();
        assert_eq!(data.into_books().len(), 1);

        let empty: BookListPayload = serde_json::from_str("[]").unwrap();
        assert!(empty.into_books().is_empty());
    }

    #[test]
    fn test_draft_validation_rejects_empty_fields() {
        let draft = BookDraft {
            title: String::new(),
            author: "x".to_string(),
            isbn: "123".to_string(),
            cover_image: String::new(),
        };
        assert!(draft.validate().is_err());

        let draft = BookDraft {
            title: "   ".to_string(),
            author: "x".to_string(),
            isbn: "123".to_string(),
            cover_image: String::new(),
        };
        assert!(draft.validate().is_err());

        let draft = BookDraft {
            title: "t".to_string(),
            author: "a".to_string(),
            isbn: "123".to_string(),
            cover_image: String::new(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_payload_omits_empty_cover() {
        let draft = BookDraft {
            title: "t".to_string(),
            author: "a".to_string(),
            isbn: "1".to_string(),
            cover_image: String::new(),
        };
        let json = serde_json::to_string(&draft.to_payload()).unwrap();
        assert!(!json.contains("coverImage"));

        let draft = BookDraft {
            cover_image: "http://img".to_string(),
            ..draft
        };
        let json = serde_json::to_string(&draft.to_payload()).unwrap();
        assert!(json.contains(r#""coverImage":"http://img""#));
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let response: LoginResponse = serde_json::from_str(r#"{"message":"Invalid"}"#).unwrap();
        assert!(response.token.is_none());
        assert!(response.user.is_none());
        assert_eq!(response.message.as_deref(), Some("Invalid"));
    }

    #[test]
    fn test_user_serialization_round_trip() {
        let user = User {
            id: Some("u1".to_string()),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            role: Some("librarian".to_string()),
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, user.id);
        assert_eq!(back.role, user.role);
    }
}
