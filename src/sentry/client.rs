//! Sentry HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, SentryError};

/// Error body returned by the Sentry API on non-success responses
#[derive(Deserialize, Debug)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Sentry API client
///
/// Holds the HTTP connection pool, the auth token and the default
/// organization slug used whenever a caller passes an empty slug.
pub struct SentryClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Fallback organization slug, fixed at construction
    default_org: String,
}

impl SentryClient {
    /// Create a new Sentry client with optimized connection settings
    pub fn new(token: String, host: String, default_org: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
            default_org,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(
        token: String,
        host: String,
        base_url: String,
        default_org: String,
    ) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
            default_org,
        }
    }

    /// Default organization slug configured at construction (may be empty)
    pub fn default_org(&self) -> &str {
        &self.default_org
    }

    /// Resolve an organization slug: a non-empty argument wins, otherwise the default.
    ///
    /// Fails with [`SentryError::MissingOrganization`] when both are empty, so an
    /// empty path segment is never sent.
    pub fn resolve_org<'a>(&'a self, org_slug: &'a str) -> Result<&'a str> {
        let slug = if org_slug.is_empty() {
            self.default_org.as_str()
        } else {
            org_slug
        };

        if slug.is_empty() {
            return Err(SentryError::MissingOrganization);
        }
        Ok(slug)
    }

    /// Build `/organizations/{slug}/` or `/organizations/{slug}/{resource}/`
    pub(crate) fn org_path(&self, org_slug: &str, resource: Option<&str>) -> Result<String> {
        let slug = self.resolve_org(org_slug)?;
        let encoded = urlencoding::encode(slug);
        Ok(match resource {
            Some(resource) => format!("/{}/{}/{}/", api::ORGANIZATIONS, encoded, resource),
            None => format!("/{}/{}/", api::ORGANIZATIONS, encoded),
        })
    }

    /// Build the base URL for API requests
    ///
    /// A host that already carries a scheme (as `SENTRY_URL` usually does) is
    /// used as-is; a bare hostname gets `https://`.
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            format!("{}{}", host, api::BASE_PATH)
        } else {
            format!("https://{}{}", host, api::BASE_PATH)
        }
    }

    /// Get the host for building URLs
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Create a request builder for `path` with standard headers
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// GET `path` and decode the JSON response
    pub(crate) async fn get_json<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::GET, path), error_context)
            .await
    }

    /// GET `path` with a serialized query string and decode the JSON response
    pub(crate) async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.send_json(builder, error_context).await
    }

    /// PUT a JSON body to `path` and decode the JSON response
    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.send_json(builder, error_context).await
    }

    /// POST a JSON body to `path` and decode the JSON response
    pub(crate) async fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.send_json(builder, error_context).await
    }

    /// Send a request, returning an error for non-success status codes
    async fn send_json<T>(&self, builder: RequestBuilder, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();
        debug!("Received {} for {}", status.as_u16(), error_context);

        if !status.is_success() {
            return Err(Self::api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Turn a non-success response into [`SentryError::Api`], keeping the server's reason
    ///
    /// Sentry puts it in `detail` for most errors, but field validation failures
    /// come back as `{"field": ["reason"]}`; those keep the raw body.
    async fn api_error(response: Response, error_context: &str) -> SentryError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let body = body.trim();

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: Some(serde_json::Value::String(detail)),
            }) => format!("Failed to {}: {}", error_context, detail),
            Ok(ErrorBody {
                detail: Some(detail),
            }) => format!("Failed to {}: {}", error_context, detail),
            _ if !body.is_empty() => format!("Failed to {}: {}", error_context, body),
            _ => format!("Failed to {}", error_context),
        };

        SentryError::Api { status, message }
    }
}

#[cfg(test)]
impl SentryClient {
    /// Create a test client pointed at a mock server, with default org `default-org`
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.sentry.io".to_string(),
            base_url.to_string(),
            "default-org".to_string(),
        )
    }
}
