use std::future::Future;
use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::redirect::Policy;
use tracing::warn;

use super::error::FetchError;
use super::html::clean_page_text;

/// Some sites serve stub pages to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const MAX_REDIRECTS: usize = 10;

/// Source of page text for a URL.
pub trait ContentFetcher: Send + Sync {
    /// Returns cleaned, capped page text or the reason there is none.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

#[derive(Debug, Clone)]
/// reqwest-backed fetcher with a per-request timeout.
pub struct HttpContentFetcher {
    http: HttpClient,
    max_chars: usize,
}

impl HttpContentFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration, max_chars: usize) -> Self {
        Self {
            http: HttpClient::builder()
                .timeout(timeout)
                .user_agent(BROWSER_USER_AGENT)
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()
                .unwrap_or_else(|e| {
                    warn!(
                        error = %e,
                        "Content fetch client build failed; using defaults without timeout or user agent"
                    );
                    HttpClient::new()
                }),
            max_chars,
        }
    }
}

impl ContentFetcher for HttpContentFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        clean_page_text(url, &body, self.max_chars)
    }
}
