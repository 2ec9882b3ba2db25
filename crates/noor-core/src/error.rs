//! Error type shared by the fetchers, the quote service and the settings store.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NoorError>;

#[derive(Debug, Error)]
pub enum NoorError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Quran API answered with a non-success status.
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("surah {surah} has no ayah {ayah} in edition {edition}")]
    VerseNotFound { surah: u16, ayah: u16, edition: String },

    #[error("no hadith with id {0}")]
    HadithNotFound(u32),

    #[error("no hadith found after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Settings(#[from] serde_json::Error),
}

impl NoorError {
    /// Network failures and non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, NoorError::Http(_) | NoorError::Status { .. })
    }
}
