//! HTTP client wrapper for the Trello API.

use std::fmt;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, Error, Result};

/// Base URL for the Trello REST API v1.
const BASE_URL: &str = "https://api.trello.com/1";

/// Trello API version this client speaks.
const API_VERSION: &str = "1";

/// Environment variable holding the Trello API key.
pub const ENV_API_KEY: &str = "API_KEY";

/// Environment variable holding the Trello API token.
pub const ENV_API_TOKEN: &str = "API_TOKEN";

/// Client for interacting with the Trello API.
///
/// Every resource returned by the client carries a clone of it, so calls can
/// be chained from one resource to the next:
///
/// ```no_run
/// use trello_api_rs::TrelloClient;
///
/// # async fn example() -> trello_api_rs::Result<()> {
/// let client = TrelloClient::from_env()?;
/// let board = client.create_board("Roadmap").await?;
/// for list in board.lists().await? {
///     println!("{}: {}", list.id, list.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrelloClient {
    key: Option<String>,
    token: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
}

impl TrelloClient {
    /// Creates a new TrelloClient authenticated with the given key and token.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::builder().key(key).token(token).build()
    }

    /// Creates a client that sends no credentials (public boards only).
    pub fn anonymous() -> Self {
        Self::builder().build()
    }

    /// Creates a client from the `API_KEY` and `API_TOKEN` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let key = read_env(ENV_API_KEY)?;
        let token = read_env(ENV_API_TOKEN)?;
        Ok(Self::new(key, token))
    }

    /// Creates a new TrelloClient with a custom base URL (for testing).
    pub fn with_base_url(
        key: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::builder().key(key).token(token).base_url(base_url).build()
    }

    /// Returns a builder for configuring a client.
    pub fn builder() -> TrelloClientBuilder {
        TrelloClientBuilder::default()
    }

    /// Returns the API key, if configured.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the API token, if configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the Trello API version used by this client.
    pub fn version(&self) -> &'static str {
        API_VERSION
    }

    /// Performs a GET request and returns the raw response body.
    ///
    /// # Arguments
    /// * `path` - The API path (e.g., "/boards/123"), optionally with a query string
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.request(Method::GET, path);
        self.execute(request, Method::GET, path).await
    }

    /// Performs a GET request with `query` percent-encoded after the credentials.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Vec<u8>> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(request, Method::GET, path).await
    }

    /// Performs a POST request with a form-encoded body and returns the raw response body.
    ///
    /// # Arguments
    /// * `path` - The API path
    /// * `form` - The payload to send as `application/x-www-form-urlencoded`
    pub async fn post<F: Serialize + ?Sized>(&self, path: &str, form: &F) -> Result<Vec<u8>> {
        let request = self.request(Method::POST, path).form(form);
        self.execute(request, Method::POST, path).await
    }

    /// Performs a PUT request with a form-encoded body and returns the raw response body.
    pub async fn put<F: Serialize + ?Sized>(&self, path: &str, form: &F) -> Result<Vec<u8>> {
        let request = self.request(Method::PUT, path).form(form);
        self.execute(request, Method::PUT, path).await
    }

    /// Performs a DELETE request and returns the raw response body.
    pub async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.request(Method::DELETE, path);
        self.execute(request, Method::DELETE, path).await
    }

    /// Builds a request for `path` with the key/token query parameters attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method, &url);

        if let Some(key) = &self.key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }

        request
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn execute(&self, request: RequestBuilder, method: Method, path: &str) -> Result<Vec<u8>> {
        debug!(%method, path, "sending Trello request");

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(body.to_vec());
        }

        debug!(%method, path, status = status.as_u16(), "Trello request failed");
        Err(parse_error_response(response, path).await)
    }
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClient")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`TrelloClient`].
///
/// ```
/// use trello_api_rs::TrelloClient;
///
/// let client = TrelloClient::builder()
///     .key("my-key")
///     .token("my-token")
///     .base_url("https://trello.example.com/1")
///     .build();
/// assert_eq!(client.base_url(), "https://trello.example.com/1");
/// ```
#[derive(Default)]
pub struct TrelloClientBuilder {
    key: Option<String>,
    token: Option<String>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl TrelloClientBuilder {
    /// Sets the API key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the base URL (trailing slashes are trimmed).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Uses a preconfigured `reqwest::Client` instead of the default one.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the client.
    pub fn build(self) -> TrelloClient {
        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| BASE_URL.to_string());

        TrelloClient {
            key: self.key,
            token: self.token,
            http_client: self.http_client.unwrap_or_default(),
            base_url,
        }
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::config(format!("environment variable {name} must be set"))),
    }
}

/// Converts a non-success response into an API error.
async fn parse_error_response(response: reqwest::Response, path: &str) -> Error {
    let status = response.status();
    let status_code = status.as_u16();

    let message = response.text().await.unwrap_or_default();
    let message = message.trim().to_string();

    let api_error = match status_code {
        401 | 403 => ApiError::Auth {
            message: if message.is_empty() {
                "Authentication failed".to_string()
            } else {
                message
            },
        },
        404 => ApiError::NotFound {
            path: path.to_string(),
        },
        400 => ApiError::Validation {
            field: None,
            message: if message.is_empty() {
                "Bad request".to_string()
            } else {
                message
            },
        },
        _ => ApiError::Http {
            status: status_code,
            message: if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                message
            },
        },
    };

    Error::Api(api_error)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
