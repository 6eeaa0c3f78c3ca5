use crate::adapters::outbound::archive::decode_index;
use crate::ports::outbound::IndexSource;
use crate::shared::error::DepGraphError;
use crate::shared::security::MAX_INDEX_SIZE;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::io::Read;
use std::thread;
use std::time::Duration;

/// Timeout for a whole index download
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// HttpIndexClient adapter for live repository mode
///
/// Downloads the index (typically `.../binary-amd64/Packages.gz`) with a
/// blocking reqwest client and hands the payload to the archive decoder.
pub struct HttpIndexClient {
    client: Client,
    max_retries: u32,
}

/// Outcome of a single download attempt
enum FetchFailure {
    /// Worth another attempt (network error, 5xx)
    Transient(String),
    /// Retrying cannot help (4xx, oversized body)
    Permanent(String),
}

impl HttpIndexClient {
    /// Creates a new client with default configuration
    pub fn new() -> Result<Self> {
        let user_agent = format!("deb-depgraph/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    /// Overrides the number of attempts per download
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Only absolute http(s) URLs are accepted
    fn validate_url(location: &str) -> Result<Url> {
        let url = Url::parse(location).map_err(|e| DepGraphError::IndexFetchError {
            url: location.to_string(),
            details: format!("Invalid URL: {}", e),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DepGraphError::IndexFetchError {
                url: location.to_string(),
                details: format!("Unsupported URL scheme '{}'", url.scheme()),
            }
            .into());
        }

        Ok(url)
    }

    /// Downloads the payload, retrying transient failures with a linear back-off
    fn fetch_with_retry(&self, url: &Url) -> Result<Vec<u8>> {
        let mut attempt = 1;
        loop {
            let details = match self.fetch_once(url) {
                Ok(bytes) => return Ok(bytes),
                Err(FetchFailure::Permanent(details)) => details,
                Err(FetchFailure::Transient(details)) if attempt < self.max_retries => {
                    thread::sleep(Duration::from_millis(500 * attempt as u64));
                    attempt += 1;
                    continue;
                }
                Err(FetchFailure::Transient(details)) => details,
            };

            return Err(DepGraphError::IndexFetchError {
                url: url.to_string(),
                details,
            }
            .into());
        }
    }

    fn fetch_once(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchFailure> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchFailure::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let details = format!("HTTP status {}", status);
            return Err(if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                FetchFailure::Transient(details)
            } else {
                FetchFailure::Permanent(details)
            });
        }

        if let Some(length) = response.content_length() {
            if length > MAX_INDEX_SIZE {
                return Err(FetchFailure::Permanent(format!(
                    "index is too large ({} bytes)",
                    length
                )));
            }
        }

        let progress = Self::progress_bar(response.content_length());
        let mut body = Vec::new();
        let read = progress
            .wrap_read(response)
            .take(MAX_INDEX_SIZE + 1)
            .read_to_end(&mut body);
        progress.finish_and_clear();

        read.map_err(|e| FetchFailure::Transient(format!("Failed to read response body: {}", e)))?;
        if body.len() as u64 > MAX_INDEX_SIZE {
            return Err(FetchFailure::Permanent(format!(
                "index exceeds {} bytes",
                MAX_INDEX_SIZE
            )));
        }

        Ok(body)
    }

    fn progress_bar(content_length: Option<u64>) -> ProgressBar {
        match content_length {
            Some(length) => {
                let pb = ProgressBar::new(length);
                pb.set_style(
                    ProgressStyle::with_template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%)",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_message("downloading index");
                pb
            }
        }
    }
}

impl IndexSource for HttpIndexClient {
    fn fetch_index(&self, location: &str) -> Result<String> {
        let url = Self::validate_url(location)?;
        let bytes = self.fetch_with_retry(&url)?;
        decode_index(bytes, location)
    }
}
