//! The quote service: selection, fetching and formatting wired together.

use futures_util::future::{try_join, OptionFuture};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

use crate::api::{HadithClient, HadithSource, QuranClient, QuranSource};
use crate::error::{NoorError, Result};
use crate::format::{format_hadith, format_quran};
use crate::selection::Selector;
use crate::settings::Settings;

/// Produces markdown quotes for a host.
///
/// Sources, selector and settings are all handed in, so a host can point the
/// service at other endpoints or a seeded generator.
pub struct Noor {
    quran: Arc<dyn QuranSource>,
    hadith: Arc<dyn HadithSource>,
    selector: Mutex<Selector>,
    settings: Settings,
}

impl Noor {
    pub fn new(
        quran: Arc<dyn QuranSource>,
        hadith: Arc<dyn HadithSource>,
        selector: Selector,
        settings: Settings,
    ) -> Self {
        Self {
            quran,
            hadith,
            selector: Mutex::new(selector),
            settings,
        }
    }

    /// Live clients and an entropy-seeded generator.
    pub fn from_settings(settings: Settings) -> Self {
        Self::new(
            Arc::new(QuranClient::new()),
            Arc::new(HadithClient::new()),
            Selector::from_entropy(),
            settings,
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // The guard is dropped before any await; the selector's state is valid
    // after every draw, so a poisoned lock is still usable.
    fn selector(&self) -> MutexGuard<'_, Selector> {
        self.selector.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A random ayah in the configured reciter edition, followed by its
    /// translation when translations are shown.
    pub async fn random_quran_quote(&self) -> Result<String> {
        let (surah, ayah) = self.selector().select_quran_position();
        let options = self.settings.display_options();

        let verse = self.quran.fetch_verse(surah, &self.settings.reciter, ayah);
        let translation: OptionFuture<_> = options
            .show_translation
            .then(|| {
                self.quran
                    .fetch_verse(surah, &self.settings.translation_option, ayah)
            })
            .into();

        let (verse, translation) = try_join(verse, async { translation.await.transpose() }).await?;

        info!(surah, ayah, "quran quote ready");
        Ok(format_quran(&verse, translation.as_ref(), &options))
    }

    /// A random hadith in the configured language. Ids the remote does not
    /// have are redrawn, up to `max_hadith_attempts` draws in total.
    pub async fn random_hadith_quote(&self) -> Result<String> {
        let attempts = self.settings.max_hadith_attempts.max(1);
        let language = &self.settings.hadith_language;

        for attempt in 1..=attempts {
            let id = self.selector().select_hadith_id();
            match self.hadith.fetch_hadith(language, id).await? {
                Some(record) => {
                    info!(id, attempt, "hadith quote ready");
                    return Ok(format_hadith(&record, &self.settings.display_options()));
                }
                None => warn!(id, attempt, "hadith absent, drawing again"),
            }
        }

        Err(NoorError::ExhaustedRetries { attempts })
    }

    /// The hadith with a specific id, in the configured language.
    pub async fn hadith_quote_by_id(&self, id: u32) -> Result<String> {
        let record = self
            .hadith
            .fetch_hadith(&self.settings.hadith_language, id)
            .await?
            .ok_or(NoorError::HadithNotFound(id))?;
        Ok(format_hadith(&record, &self.settings.display_options()))
    }

    /// One Quran quote and one hadith quote, fetched together.
    pub async fn dhikr(&self) -> Result<String> {
        let (quran, hadith) = try_join(self.random_quran_quote(), self.random_hadith_quote()).await?;
        Ok(format!("\n{}\n{}", quran, hadith))
    }
}
