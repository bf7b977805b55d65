use serde::Deserialize;
use thiserror::Error;

use crate::filter::FilterState;
use crate::model::GalleryPage;

pub const DEV_ENDPOINT: &str = "/api/hello";
pub const IMGUR_GALLERY_URL: &str = "https://api.imgur.com/3/gallery";
pub const IMGUR_CLIENT_ID: &str = "b4c20abfbe6d41c";
const GALLERY_QUERY: &str = "showViral=true&mature=true&album_previews=true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Reads an environment-style mode name, falling back to `default` for
    /// anything unset or unrecognised.
    pub fn from_env(value: Option<&str>, default: Mode) -> Mode {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("development") | Some("dev") => Mode::Development,
            Some("production") | Some("prod") => Mode::Production,
            _ => default,
        }
    }
}

/// Runtime configuration, built once at startup and handed to the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Config { mode }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("gallery responded with status {0}")]
    Rejected(u16),
    #[error("invalid gallery response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        FetchError::Decode(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    pub url: String,
    pub authorization: Option<String>,
}

impl GalleryRequest {
    pub fn for_filter(config: &Config, filter: &FilterState) -> Self {
        match config.mode {
            // the stub endpoint serves one fixed page regardless of the filter
            Mode::Development => GalleryRequest {
                url: DEV_ENDPOINT.to_string(),
                authorization: None,
            },
            Mode::Production => GalleryRequest {
                url: format!(
                    "{}/{}/{}/{}/{}?{}",
                    IMGUR_GALLERY_URL,
                    filter.section(),
                    filter.sort().as_str(),
                    filter.window().as_str(),
                    filter.page(),
                    GALLERY_QUERY
                ),
                authorization: Some(format!("Client-ID {}", IMGUR_CLIENT_ID)),
            },
        }
    }
}

// Imgur puts an error object in `data` when `success` is false, so the
// envelope is checked before the items are decoded.
#[derive(Deserialize)]
struct Envelope {
    data: serde_json::Value,
    success: bool,
    status: u16,
}

pub fn decode_page(body: &str) -> Result<GalleryPage, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(FetchError::Rejected(envelope.status));
    }

    Ok(GalleryPage {
        data: serde_json::from_value(envelope.data)?,
        success: envelope.success,
        status: envelope.status,
    })
}

/// Anything that can produce a page of the gallery for a filter.
#[allow(async_fn_in_trait)]
pub trait GallerySource {
    async fn fetch_page(&self, filter: &FilterState) -> Result<GalleryPage, FetchError>;
}
