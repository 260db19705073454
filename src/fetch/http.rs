// src/fetch/http.rs
// =============================================================================
// HTTP transport for word pages.
//
// Key functionality:
// - Builds a word's URL from the base URL (base + word)
// - GETs the page with a timeout and a browser-like User-Agent
//   (the dictionary refuses requests from unknown clients)
// - Turns non-2xx responses and network failures into FetchError
//
// No retries happen here: a failed word is simply a failed visit.
// =============================================================================

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Anything that can turn a URL into raw page markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::from_reqwest_error)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.text().await.map_err(FetchError::from_reqwest_error)
    }
}

// Builds the page URL for a word
//
// Parameters:
//   base: directory-style base URL (ends with '/')
//   word: the word to look up; reserved characters are percent-encoded
//
// Example:
//   base = "https://dictionary.cambridge.org/dictionary/english/"
//   word = "thesaurus" -> ".../dictionary/english/thesaurus"
pub fn word_url(base: &Url, word: &str) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}
