//! Response shapes of the two remote APIs and the records built from them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::tables::Revelation;

// ============================================================================
// alquran.cloud
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct QuranEnvelope {
    pub data: SurahResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SurahResponse {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub revelation_type: String,
    #[serde(default)]
    pub ayahs: Vec<AyahResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AyahResponse {
    pub text: String,
    pub number_in_surah: u16,
    #[serde(default)]
    pub audio: Option<String>,
}

/// One ayah in one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuranVerse {
    pub surah: u16,
    pub ayah: u16,
    pub text: String,
    pub audio: Option<String>,
    pub surah_name: String,
    pub surah_english_name: String,
    pub revelation: Revelation,
    pub edition: String,
}

// ============================================================================
// hadeethenc.com
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct HadithResponse {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub hadeeth: String,
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub words_meanings: Option<Vec<WordMeaning>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMeaning {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HadithRecord {
    pub id: u32,
    /// Language code the record was fetched in.
    pub language: String,
    pub title: String,
    pub body: String,
    pub attribution: String,
    pub grade: String,
    pub explanation: String,
    pub word_meanings: Option<Vec<WordMeaning>>,
    pub benefits: Vec<String>,
}

impl HadithResponse {
    pub(crate) fn into_record(self, language: &str) -> HadithRecord {
        HadithRecord {
            id: self.id,
            language: language.to_string(),
            title: self.title,
            body: self.hadeeth,
            attribution: self.attribution,
            grade: self.grade,
            explanation: self.explanation,
            word_meanings: self.words_meanings.filter(|w| !w.is_empty()),
            benefits: self.hints,
        }
    }
}

/// hadeethenc serves ids as strings; accept numbers too.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u32),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Number(n) => Ok(n),
        Id::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hadith_id_accepts_string_and_number() {
        let text: HadithResponse =
            serde_json::from_str(r#"{"id":"4176","hadeeth":"body"}"#).unwrap();
        assert_eq!(text.id, 4176);
        let number: HadithResponse =
            serde_json::from_str(r#"{"id":4176,"hadeeth":"body"}"#).unwrap();
        assert_eq!(number.id, 4176);
        assert!(serde_json::from_str::<HadithResponse>(r#"{"id":"abc","hadeeth":"x"}"#).is_err());
    }

    #[test]
    fn test_empty_word_meanings_become_none() {
        let response: HadithResponse = serde_json::from_str(
            r#"{"id":"1","hadeeth":"b","hints":["a"],"words_meanings":[]}"#,
        )
        .unwrap();
        let record = response.into_record("en");
        assert_eq!(record.word_meanings, None);
        assert_eq!(record.benefits, vec!["a".to_string()]);
        assert_eq!(record.language, "en");
    }

    #[test]
    fn test_surah_response_shape() {
        let body = r#"{"code":200,"status":"OK","data":{"number":13,"name":"سُورَةُ الرَّعۡدِ",
            "englishName":"Ar-Ra'd","englishNameTranslation":"The Thunder",
            "revelationType":"Medinan","numberOfAyahs":43,
            "ayahs":[{"number":1748,"text":"t","numberInSurah":41,"juz":13,
            "audio":"https://cdn.islamic.network/quran/audio/128/ar.abdulbasitmurattal/1748.mp3"}]}}"#;
        let envelope: QuranEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.number, 13);
        assert_eq!(envelope.data.ayahs[0].number_in_surah, 41);
        assert!(envelope.data.ayahs[0].audio.is_some());
    }
}
