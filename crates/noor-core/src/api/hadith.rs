use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::HadithSource;
use crate::error::{NoorError, Result};
use crate::models::{HadithRecord, HadithResponse};

pub const DEFAULT_HADITH_BASE_URL: &str = "https://hadeethenc.com";

#[derive(Clone)]
pub struct HadithClient {
    client: Client,
    base_url: String,
}

impl HadithClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_HADITH_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn hadith_url(&self, language: &str, id: u32) -> String {
        format!(
            "{}/api/v1/hadeeths/one/?language={}&id={}",
            self.base_url, language, id
        )
    }
}

impl Default for HadithClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HadithSource for HadithClient {
    async fn fetch_hadith(&self, language: &str, id: u32) -> Result<Option<HadithRecord>> {
        let url = self.hadith_url(language, id);
        debug!(%url, "fetching hadith");

        let response = self.client.get(&url).send().await?;

        // hadeethenc reports unknown ids with a non-success status
        if !response.status().is_success() {
            warn!(id, status = response.status().as_u16(), "hadith not available");
            return Ok(None);
        }

        let body = response.text().await?;
        parse_hadith(&url, &body, language).map(Some)
    }
}

pub fn parse_hadith(url: &str, body: &str, language: &str) -> Result<HadithRecord> {
    let response: HadithResponse = serde_json::from_str(body).map_err(|source| NoorError::Decode {
        url: url.to_string(),
        source,
    })?;
    Ok(response.into_record(language))
}
