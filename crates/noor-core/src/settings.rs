//! User preferences and where they are persisted.
//!
//! The host owns storage; the core only sees a [`SettingsStore`] that hands
//! back whatever partial settings were saved. Loading always produces a fully
//! populated [`Settings`] by merging the stored fields over the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::format::{DisplayOptions, InterfaceLanguage};
use crate::tables::{is_hadith_language, EditionCatalog};

pub const DEFAULT_RECITER: &str = "ar.abdulbasitmurattal";
pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "en";
pub const DEFAULT_TRANSLATION: &str = "en.ahmedali";
pub const DEFAULT_HADITH_LANGUAGE: &str = "ar";
pub const DEFAULT_DHIKR_FILEPATH: &str = "Noor/Dhikr.md";
pub const DEFAULT_MAX_HADITH_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub reciter: String,
    pub translation_language: String,
    pub translation_option: String,
    pub hadith_language: String,
    pub show_translation: bool,
    pub interface_language: InterfaceLanguage,
    pub dhikr_filepath: String,
    pub max_hadith_attempts: u32,
}

/// What a store holds: any subset of the fields, possibly from an older
/// version of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSettings {
    pub reciter: Option<String>,
    pub translation_language: Option<String>,
    pub translation_option: Option<String>,
    pub hadith_language: Option<String>,
    pub show_translation: Option<bool>,
    pub interface_language: Option<InterfaceLanguage>,
    pub dhikr_filepath: Option<String>,
    pub max_hadith_attempts: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reciter: DEFAULT_RECITER.to_string(),
            translation_language: DEFAULT_TRANSLATION_LANGUAGE.to_string(),
            translation_option: DEFAULT_TRANSLATION.to_string(),
            hadith_language: DEFAULT_HADITH_LANGUAGE.to_string(),
            show_translation: true,
            interface_language: InterfaceLanguage::Native,
            dhikr_filepath: DEFAULT_DHIKR_FILEPATH.to_string(),
            max_hadith_attempts: DEFAULT_MAX_HADITH_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Field-wise merge: a loaded value wins, a missing one keeps `self`'s.
    pub fn merge_with(self, loaded: PartialSettings) -> Settings {
        Settings {
            reciter: loaded.reciter.unwrap_or(self.reciter),
            translation_language: loaded
                .translation_language
                .unwrap_or(self.translation_language),
            translation_option: loaded.translation_option.unwrap_or(self.translation_option),
            hadith_language: loaded.hadith_language.unwrap_or(self.hadith_language),
            show_translation: loaded.show_translation.unwrap_or(self.show_translation),
            interface_language: loaded.interface_language.unwrap_or(self.interface_language),
            dhikr_filepath: loaded.dhikr_filepath.unwrap_or(self.dhikr_filepath),
            max_hadith_attempts: loaded.max_hadith_attempts.unwrap_or(self.max_hadith_attempts),
        }
    }

    /// Repair values the catalog does not know.
    ///
    /// A translation that is empty or belongs to another language is replaced
    /// by the first translation of the selected language, which is what
    /// happens when the translation language is changed.
    pub fn normalized(mut self, catalog: &EditionCatalog) -> Settings {
        if catalog.reciter(&self.reciter).is_none() {
            warn!(reciter = %self.reciter, "unknown reciter, using default");
            self.reciter = DEFAULT_RECITER.to_string();
        }

        if catalog.translations_for(&self.translation_language).is_empty() {
            warn!(language = %self.translation_language, "unknown translation language, using default");
            self.translation_language = DEFAULT_TRANSLATION_LANGUAGE.to_string();
        }

        let belongs = catalog
            .translation(&self.translation_option)
            .map(|e| e.language == self.translation_language)
            .unwrap_or(false);
        if !belongs {
            if let Some(first) = catalog.default_translation(&self.translation_language) {
                debug!(
                    from = %self.translation_option,
                    to = first.identifier,
                    "replacing translation option"
                );
                self.translation_option = first.identifier.to_string();
            }
        }

        if !is_hadith_language(&self.hadith_language) {
            warn!(language = %self.hadith_language, "unknown hadith language, using default");
            self.hadith_language = DEFAULT_HADITH_LANGUAGE.to_string();
        }

        if self.max_hadith_attempts == 0 {
            self.max_hadith_attempts = 1;
        }

        self
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_translation: self.show_translation,
            interface_language: self.interface_language,
        }
    }

    /// Defaults merged with whatever `store` holds.
    pub fn load(store: &dyn SettingsStore) -> Result<Self> {
        let loaded = store.load()?.unwrap_or_default();
        Ok(Settings::default().merge_with(loaded))
    }

    pub fn save(&self, store: &dyn SettingsStore) -> Result<()> {
        store.save(self)
    }
}

/// Opaque load/save contract the host provides.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PartialSettings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings kept as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/noor/settings.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("noor").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<PartialSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let partial: PartialSettings = serde_json::from_str(&content)?;
        Ok(Some(partial))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Store for hosts that keep settings elsewhere, and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<PartialSettings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(partial: PartialSettings) -> Self {
        Self {
            saved: Mutex::new(Some(partial)),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<PartialSettings>> {
        Ok(self
            .saved
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(settings.clone().into());
        Ok(())
    }
}

impl From<Settings> for PartialSettings {
    fn from(s: Settings) -> Self {
        PartialSettings {
            reciter: Some(s.reciter),
            translation_language: Some(s.translation_language),
            translation_option: Some(s.translation_option),
            hadith_language: Some(s.hadith_language),
            show_translation: Some(s.show_translation),
            interface_language: Some(s.interface_language),
            dhikr_filepath: Some(s.dhikr_filepath),
            max_hadith_attempts: Some(s.max_hadith_attempts),
        }
    }
}
