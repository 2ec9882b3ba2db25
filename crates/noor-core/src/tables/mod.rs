//! Static reference data: chapters, editions and the hadith pool.

pub mod editions;
pub mod hadiths;
pub mod surahs;

pub use editions::{Direction, Edition, EditionCatalog, EditionFormat, RECITERS, TRANSLATIONS};
pub use hadiths::{is_hadith_language, HADITH_IDS, HADITH_LANGUAGES};
pub use surahs::{ayah_count, surah_by_number, Revelation, Surah, SURAHS, SURAH_COUNT};
