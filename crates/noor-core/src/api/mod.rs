pub mod hadith;
pub mod quran;

pub use hadith::HadithClient;
pub use quran::QuranClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{HadithRecord, QuranVerse};

/// Resolves a (surah, edition, ayah) triple to the ayah's text in that edition.
#[async_trait]
pub trait QuranSource: Send + Sync {
    async fn fetch_verse(&self, surah: u16, edition: &str, ayah: u16) -> Result<QuranVerse>;
}

/// Resolves a hadith id. `Ok(None)` means the remote has no such id in that
/// language, which callers treat as "draw again" rather than a failure.
#[async_trait]
pub trait HadithSource: Send + Sync {
    async fn fetch_hadith(&self, language: &str, id: u32) -> Result<Option<HadithRecord>>;
}
