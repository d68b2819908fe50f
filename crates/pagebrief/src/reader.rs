//! Page reader
//!
//! Fetches a web page once and reduces it to its paragraph text. The
//! [`PageReader`] trait is the seam the [`Briefer`](crate::Briefer) calls
//! when the model asks for `read_website_content`.

use crate::error::BriefError;
use crate::extract::paragraph_text;
use crate::types::WebsiteContent;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Connect + response headers timeout
const FIRST_BYTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Body timeout (total)
const BODY_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads a URL and returns its textual content
#[async_trait]
pub trait PageReader: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &'static str;

    /// Fetch the page and extract its text
    async fn read(&self, url: &str) -> Result<WebsiteContent, BriefError>;
}

/// Options for the HTTP page reader
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Connect + response headers timeout (default 10 s)
    pub first_byte_timeout: Option<Duration>,
    /// Deadline for reading the whole body (default 30 s)
    pub body_timeout: Option<Duration>,
}

/// Default reader: one GET request, paragraph text extraction
///
/// The HTTP status is not checked; error pages are read like any other
/// page and whatever paragraphs they contain are returned.
#[derive(Debug, Clone)]
pub struct HttpPageReader {
    client: reqwest::Client,
    first_byte_timeout: Duration,
    body_timeout: Duration,
}

impl HttpPageReader {
    /// Create a reader with default options
    pub fn new() -> Result<Self, BriefError> {
        Self::with_options(ReaderOptions::default())
    }

    /// Create a reader with custom options
    pub fn with_options(options: ReaderOptions) -> Result<Self, BriefError> {
        let mut headers = HeaderMap::new();
        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("text/html, */*;q=0.8"));

        let first_byte_timeout = options.first_byte_timeout.unwrap_or(FIRST_BYTE_TIMEOUT);
        let body_timeout = options.body_timeout.unwrap_or(BODY_TIMEOUT);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(first_byte_timeout)
            .build()
            .map_err(BriefError::ClientBuildError)?;

        Ok(Self {
            client,
            first_byte_timeout,
            body_timeout,
        })
    }
}

#[async_trait]
impl PageReader for HttpPageReader {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn read(&self, url: &str) -> Result<WebsiteContent, BriefError> {
        if url.is_empty() {
            return Err(BriefError::MissingUrl);
        }
        validate_url(url)?;

        debug!(url, "Reading website content");

        let send = self.client.get(url).send();
        let response = tokio::time::timeout(self.first_byte_timeout, send)
            .await
            .map_err(|_| BriefError::FirstByteTimeout)?
            .map_err(BriefError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "Reading non-success page");
        }

        let (body, truncated) = read_body_with_timeout(response, self.body_timeout).await?;
        if truncated {
            warn!(url, bytes = body.len(), "Using truncated page body");
        }

        let html = String::from_utf8_lossy(&body);
        Ok(WebsiteContent {
            website_body: paragraph_text(&html),
            url: url.to_string(),
        })
    }
}

/// Check the URL parses and uses http or https
fn validate_url(url: &str) -> Result<(), BriefError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(BriefError::InvalidUrlScheme);
    }
    Url::parse(url).map_err(|_| BriefError::InvalidUrlScheme)?;
    Ok(())
}

/// Read response body with timeout, returning partial content if timeout occurs
///
/// A stream error (reset connection, body shorter than its Content-Length)
/// fails the read; only the deadline yields a truncated body.
async fn read_body_with_timeout(
    response: reqwest::Response,
    timeout: Duration,
) -> Result<(Bytes, bool), BriefError> {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let chunk_future = stream.next();
        let timeout_future = tokio::time::sleep_until(deadline);

        tokio::select! {
            chunk = chunk_future => {
                match chunk {
                    Some(Ok(bytes)) => {
                        body.extend_from_slice(&bytes);
                    }
                    Some(Err(e)) => {
                        debug!(bytes = body.len(), error = %e, "Body stream failed");
                        return Err(BriefError::RequestError(e.to_string()));
                    }
                    None => {
                        return Ok((Bytes::from(body), false));
                    }
                }
            }
            _ = timeout_future => {
                return Ok((Bytes::from(body), true));
            }
        }
    }
}
