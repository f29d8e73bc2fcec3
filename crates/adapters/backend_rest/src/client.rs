//! HTTP client handle and request plumbing shared by the stores.

use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Configuration for the REST backend adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backend, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Service API key, sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PUMPHUB_BACKEND_URL` or
    /// `PUMPHUB_BACKEND_API_KEY` is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            base_url: std::env::var("PUMPHUB_BACKEND_URL")?,
            api_key: std::env::var("PUMPHUB_BACKEND_API_KEY")?,
        })
    }

    /// Build a [`BackendClient`] from this configuration.
    #[must_use]
    pub fn build(self) -> BackendClient {
        BackendClient::new(self)
    }
}

/// Shared handle on the hosted table backend.
///
/// Cheap to clone; each store keeps its own clone the way repositories
/// share a connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    /// Create a new client for the given backend.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Fetch all rows matching `query` from `table`.
    pub(crate) async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RestError> {
        let response = self
            .http
            .get(self.table_url(table))
            .headers(self.auth_headers())
            .query(query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch rows plus the exact total count of all matching rows.
    ///
    /// The count travels in the `Content-Range` header (`0-19/57`); a
    /// backend that reports no count (or `*`) yields `None`.
    pub(crate) async fn get_rows_with_count<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<(Vec<T>, Option<u64>), RestError> {
        let response = self
            .http
            .get(self.table_url(table))
            .headers(self.auth_headers())
            .header("Prefer", "count=exact")
            .query(query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total);

        Ok((response.json().await?, total))
    }

    /// Delete all rows matching `query` from `table`.
    pub(crate) async fn delete_rows(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<(), RestError> {
        let response = self
            .http
            .delete(self.table_url(table))
            .headers(self.auth_headers())
            .header("Prefer", "return=minimal")
            .query(query)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), %body, "backend request failed");
        Err(RestError::Status {
            status: status.as_u16(),
            message: error_message_from_body(&body, status.as_u16()),
        })
    }
}

/// Extract the total from a `Content-Range` value such as `0-19/57`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.parse().ok()
}

/// Pull the `message` field out of a PostgREST error body, falling back to
/// the raw body (or the status code when the body is empty).
fn error_message_from_body(body: &str, status: u16) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    if body.trim().is_empty() {
        return format!("backend returned HTTP {status}");
    }
    body.trim().to_string()
}
