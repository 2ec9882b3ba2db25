pub mod api;
pub mod editor;
pub mod error;
pub mod format;
pub mod mersenne;
pub mod models;
pub mod quote;
pub mod selection;
pub mod settings;
pub mod tables;

// Re-export main types for convenience
pub use api::{HadithClient, HadithSource, QuranClient, QuranSource};
pub use error::{NoorError, Result};
pub use format::{format_hadith, format_quran, DisplayOptions, InterfaceLanguage};
pub use mersenne::{MersenneTwister, RandomSource};
pub use models::{HadithRecord, QuranVerse, WordMeaning};
pub use quote::Noor;
pub use selection::Selector;
pub use settings::{JsonFileStore, MemoryStore, PartialSettings, Settings, SettingsStore};
pub use tables::{Edition, EditionCatalog, Revelation, Surah};
