use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::QuranSource;
use crate::error::{NoorError, Result};
use crate::models::{QuranEnvelope, QuranVerse};
use crate::tables::{surah_by_number, Revelation};

pub const DEFAULT_QURAN_BASE_URL: &str = "https://api.alquran.cloud";

#[derive(Clone)]
pub struct QuranClient {
    client: Client,
    base_url: String,
}

impl QuranClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_QURAN_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `offset` counts the ayahs skipped, so ayah N sits at offset N - 1.
    pub fn verse_url(&self, surah: u16, edition: &str, ayah: u16) -> String {
        format!(
            "{}/v1/surah/{}/{}?offset={}&limit=1",
            self.base_url,
            surah,
            edition,
            ayah.saturating_sub(1)
        )
    }
}

impl Default for QuranClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuranSource for QuranClient {
    async fn fetch_verse(&self, surah: u16, edition: &str, ayah: u16) -> Result<QuranVerse> {
        let url = self.verse_url(surah, edition, ayah);
        debug!(%url, "fetching verse");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(NoorError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_verse(&url, &body, surah, edition, ayah)
    }
}

/// Decode an alquran.cloud surah response and pick out the requested ayah.
pub fn parse_verse(url: &str, body: &str, surah: u16, edition: &str, ayah: u16) -> Result<QuranVerse> {
    let envelope: QuranEnvelope = serde_json::from_str(body).map_err(|source| NoorError::Decode {
        url: url.to_string(),
        source,
    })?;
    let data = envelope.data;

    let found = data
        .ayahs
        .into_iter()
        .find(|a| a.number_in_surah == ayah)
        .ok_or_else(|| NoorError::VerseNotFound {
            surah,
            ayah,
            edition: edition.to_string(),
        })?;

    // The remote string is trusted; the static table decides when it is unfamiliar.
    let revelation = Revelation::from_str(&data.revelation_type)
        .or_else(|| surah_by_number(surah).map(|s| s.revelation))
        .unwrap_or(Revelation::Meccan);

    Ok(QuranVerse {
        surah: data.number,
        ayah: found.number_in_surah,
        text: found.text,
        audio: found.audio.filter(|a| !a.is_empty()),
        surah_name: data.name,
        surah_english_name: data.english_name,
        revelation,
        edition: edition.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub;

    const RA_D_41: &str = r#"{"code":200,"status":"OK","data":{"number":13,
        "name":"سُورَةُ الرَّعۡدِ","englishName":"Ar-Ra'd","englishNameTranslation":"The Thunder",
        "revelationType":"Medinan","numberOfAyahs":43,
        "ayahs":[{"number":1748,"text":"أَوَلَمۡ يَرَوۡاْ","numberInSurah":41,
        "audio":"https://cdn.islamic.network/quran/audio/128/ar.abdulbasitmurattal/1748.mp3"}]}}"#;

    #[test]
    fn test_verse_url_uses_zero_based_offset() {
        let client = QuranClient::new();
        assert_eq!(
            client.verse_url(13, "en.ahmedali", 41),
            "https://api.alquran.cloud/v1/surah/13/en.ahmedali?offset=40&limit=1"
        );
        assert_eq!(
            client.verse_url(1, "ar.abdulbasitmurattal", 1),
            "https://api.alquran.cloud/v1/surah/1/ar.abdulbasitmurattal?offset=0&limit=1"
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = QuranClient::with_base_url("http://localhost:8080/");
        assert!(client.verse_url(2, "x", 3).starts_with("http://localhost:8080/v1/surah/2/x"));
    }

    #[test]
    fn test_parse_verse() {
        let verse = parse_verse("u", RA_D_41, 13, "ar.abdulbasitmurattal", 41).unwrap();
        assert_eq!(verse.surah, 13);
        assert_eq!(verse.ayah, 41);
        assert_eq!(verse.surah_english_name, "Ar-Ra'd");
        assert_eq!(verse.revelation, Revelation::Medinan);
        assert!(verse.audio.unwrap().ends_with("1748.mp3"));
    }

    #[test]
    fn test_parse_verse_missing_ayah() {
        let err = parse_verse("u", RA_D_41, 13, "en.ahmedali", 42).unwrap_err();
        assert!(matches!(err, NoorError::VerseNotFound { surah: 13, ayah: 42, .. }));
    }

    #[test]
    fn test_parse_verse_malformed_body() {
        let err = parse_verse("u", "<html>", 13, "en.ahmedali", 41).unwrap_err();
        assert!(matches!(err, NoorError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_verse_over_http() {
        let base = stub::serve(vec![(200, RA_D_41)]).await;
        let client = QuranClient::with_base_url(&base);

        let verse = client.fetch_verse(13, "ar.abdulbasitmurattal", 41).await.unwrap();
        assert_eq!((verse.surah, verse.ayah), (13, 41));
        assert_eq!(verse.edition, "ar.abdulbasitmurattal");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let base = stub::serve(vec![(500, "")]).await;
        let client = QuranClient::with_base_url(&base);

        let err = client.fetch_verse(1, "en.ahmedali", 1).await.unwrap_err();
        match &err {
            NoorError::Status { url, status } => {
                assert_eq!(*status, 500);
                assert!(url.ends_with("/v1/surah/1/en.ahmedali?offset=0&limit=1"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        assert!(err.is_transport());
    }
}
