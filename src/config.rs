// src/config.rs
// =============================================================================
// Crawl settings.
//
// Two knobs control how polite and how big a crawl is:
// - vocabulary_limit: how many distinct words we try at most (default 50)
// - request_delay: how long we wait between words (default 1 second)
//
// Plus where the dictionary lives (base_url). A word's page is
// base_url + word, e.g.
//   https://dictionary.cambridge.org/dictionary/english/ + thesaurus
//
// The CLI (src/cli.rs) reads these from flags or environment variables and
// hands them to CrawlConfig::new, which validates them.
// =============================================================================

use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_VOCABULARY_LIMIT: usize = 50;
pub const DEFAULT_REQUEST_DELAY_SECONDS: f64 = 1.0;
pub const DEFAULT_BASE_URL: &str = "https://dictionary.cambridge.org/dictionary/english/";

#[derive(Debug, Clone, PartialEq)]
pub struct CrawlConfig {
    vocabulary_limit: usize,
    request_delay: Duration,
    base_url: Url,
}

impl CrawlConfig {
    // Builds a validated config
    //
    // Parameters:
    //   vocabulary_limit: at least 1
    //   request_delay_seconds: finite and >= 0
    //   base_url: absolute http(s) URL; a trailing '/' is added if missing so
    //             that joining a word appends instead of replacing the last segment
    pub fn new(
        vocabulary_limit: usize,
        request_delay_seconds: f64,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        if vocabulary_limit == 0 {
            return Err(ConfigError::InvalidVocabularyLimit);
        }

        let request_delay = Duration::try_from_secs_f64(request_delay_seconds)
            .map_err(|_| ConfigError::InvalidDelay(request_delay_seconds))?;

        Ok(Self {
            vocabulary_limit,
            request_delay,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Maximum number of distinct words visited per run.
    pub fn vocabulary_limit(&self) -> usize {
        self.vocabulary_limit
    }

    /// Pause between two visits.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Directory-style URL that word pages live under.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            vocabulary_limit: DEFAULT_VOCABULARY_LIMIT,
            request_delay: Duration::from_secs_f64(DEFAULT_REQUEST_DELAY_SECONDS),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("url has no host"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
