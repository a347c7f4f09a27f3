//! The network seam.
//!
//! `ImageSource` is the one trait boundary in the tool: the downloader only
//! ever asks "give me the bytes behind this URL", which keeps the retry and
//! fallback logic testable without a network.

use crate::config::Config;

/// Errors that can occur while fetching and storing a remote image.
#[derive(Debug)]
pub enum FetchError {
    /// Request construction, transport, timeout, or non-success status.
    Http(reqwest::Error),
    /// The payload did not decode as an image.
    InvalidImage(image::ImageError),
    /// Filesystem error while saving.
    Io(std::io::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
            FetchError::InvalidImage(e) => write!(f, "Image validation failed: {}", e),
            FetchError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e)
    }
}

impl From<image::ImageError> for FetchError {
    fn from(e: image::ImageError) -> Self {
        FetchError::InvalidImage(e)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

/// Something that can fetch raw image bytes from a URL.
pub trait ImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Production source: a blocking HTTP client with a browser-like user-agent.
/// Some image hosts reject requests without one.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}
