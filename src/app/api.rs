//! Catalog API Client
//!
//! One long-lived HTTP client for all requests against the catalog backend,
//! configured with the resolved base URL and a fixed timeout. Authorization
//! is attached per call because login is unauthenticated. Calls are
//! synchronous from the caller's point of view and are meant to run on
//! worker threads; the client owns the tokio runtime that drives reqwest.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::app::config::Config;
use crate::app::error::ApiError;
use crate::app::types::{Book, BookListPayload, BookPayload, LoginRequest, LoginResponse, ServerMessage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ApiClient {
    config: Config,
    http: Client,
    runtime: Runtime,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::network(format!("failed to build HTTP client: {}", err)))?;
        let runtime = Runtime::new()
            .map_err(|err| ApiError::network(format!("failed to create runtime: {}", err)))?;
        Ok(Self {
            config,
            http,
            runtime,
        })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let url = self.config.api_url(path);
        Url::parse(&url).map_err(|err| ApiError::network(format!("invalid URL {}: {}", url, err)))
    }

    /// `/api/books/<id>` with the id pushed as one path segment, so ids
    /// containing reserved characters are percent-encoded.
    fn book_endpoint(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/books")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::network("base URL does not accept path segments".to_string()))?
            .push(id);
        Ok(url)
    }

    /// Exchange credentials for a token and user record. Unauthenticated.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/login")?;
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.runtime.block_on(async {
            let response = self.http.post(url).json(&body).send().await?;
            if !response.status().is_success() {
                return Err(Self::error_from_response(response).await);
            }
            Self::decode_body(response).await
        })
    }

    /// Fetch the whole catalog. The bearer header is attached only when a
    /// token exists; 401/403 map to [`ApiError::AccessDenied`] so callers
    /// can raise the access-denied notice.
    pub fn fetch_books(&self, token: Option<&str>) -> Result<Vec<Book>, ApiError> {
        let url = self.endpoint("/books")?;

        self.runtime.block_on(async {
            let mut request = self.http.get(url);
            if let Some(token) = token {
                request = request.header("Authorization", format!("Bearer {}", token));
            }
            let response = request.send().await?;
            let status = response.status();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(ApiError::AccessDenied);
            }
            if !status.is_success() {
                return Err(Self::error_from_response(response).await);
            }
            let payload: BookListPayload = Self::decode_body(response).await?;
            let books = payload.into_books();
            debug!("fetched {} books", books.len());
            Ok(books)
        })
    }

    /// Create a catalog entry. Librarian role is enforced server-side.
    pub fn add_book(&self, token: Option<&str>, book: &BookPayload) -> Result<(), ApiError> {
        let url = self.endpoint("/books")?;
        self.runtime
            .block_on(async { self.send_mutation(self.http.post(url), token, Some(book)).await })
    }

    /// Replace the record identified by `id` (server id, or isbn when the
    /// record carries none).
    pub fn update_book(
        &self,
        token: Option<&str>,
        id: &str,
        book: &BookPayload,
    ) -> Result<(), ApiError> {
        let url = self.book_endpoint(id)?;
        self.runtime
            .block_on(async { self.send_mutation(self.http.put(url), token, Some(book)).await })
    }

    /// Delete the record identified by `id`.
    pub fn delete_book(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        let url = self.book_endpoint(id)?;
        self.runtime
            .block_on(async { self.send_mutation(self.http.delete(url), token, None).await })
    }

    async fn send_mutation(
        &self,
        mut request: reqwest::RequestBuilder,
        token: Option<&str>,
        body: Option<&BookPayload>,
    ) -> Result<(), ApiError> {
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))
    }

    /// Build a [`ApiError::Server`] from a non-2xx response, preferring the
    /// `{message}` the backend puts in error bodies.
    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ServerMessage>(&body).ok())
            .and_then(|body| body.message)
            .unwrap_or(fallback);
        ApiError::server(status.as_u16(), message)
    }
}
