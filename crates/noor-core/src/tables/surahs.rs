//! Quran chapter metadata.

use serde::{Deserialize, Serialize};

/// Where a chapter was revealed. The remote API reports the same two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}

impl Revelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Revelation::Meccan => "Meccan",
            Revelation::Medinan => "Medinan",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            Revelation::Meccan => "مكية",
            Revelation::Medinan => "مدنية",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "meccan" => Some(Revelation::Meccan),
            "medinan" => Some(Revelation::Medinan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub number: u16,
    pub name: &'static str,
    pub english_name: &'static str,
    pub english_name_translation: &'static str,
    pub ayah_count: u16,
    pub revelation: Revelation,
}

const fn surah(
    number: u16,
    name: &'static str,
    english_name: &'static str,
    english_name_translation: &'static str,
    ayah_count: u16,
    revelation: Revelation,
) -> Surah {
    Surah {
        number,
        name,
        english_name,
        english_name_translation,
        ayah_count,
        revelation,
    }
}

pub const SURAH_COUNT: u16 = 114;

/// Look up a chapter by its 1-based number.
pub fn surah_by_number(number: u16) -> Option<&'static Surah> {
    if number == 0 {
        return None;
    }
    SURAHS.get(usize::from(number) - 1)
}

/// Number of ayahs in a chapter.
///
/// # Panics
///
/// Panics when `number` is outside `1..=114`. Callers only pass ordinals
/// produced by the selector.
pub fn ayah_count(number: u16) -> u16 {
    surah_by_number(number)
        .map(|s| s.ayah_count)
        .unwrap_or_else(|| panic!("surah number {} out of range", number))
}

/// Static chapter metadata, in canonical order.
pub static SURAHS: [Surah; 114] = [
    surah(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", "The Opening", 7, Revelation::Meccan),
    surah(2, "سُورَةُ البَقَرَةِ", "Al-Baqara", "The Cow", 286, Revelation::Medinan),
    surah(3, "سُورَةُ آلِ عِمۡرَانَ", "Aal-i-Imraan", "The Family of Imraan", 200, Revelation::Medinan),
    surah(4, "سُورَةُ النِّسَاءِ", "An-Nisaa", "The Women", 176, Revelation::Medinan),
    surah(5, "سُورَةُ المَائـِدَةِ", "Al-Maaida", "The Table", 120, Revelation::Medinan),
    surah(6, "سُورَةُ الأَنۡعَامِ", "Al-An'aam", "The Cattle", 165, Revelation::Meccan),
    surah(7, "سُورَةُ الأَعۡرَافِ", "Al-A'raaf", "The Heights", 206, Revelation::Meccan),
    surah(8, "سُورَةُ الأَنفَالِ", "Al-Anfaal", "The Spoils of War", 75, Revelation::Medinan),
    surah(9, "سُورَةُ التَّوۡبَةِ", "At-Tawba", "The Repentance", 129, Revelation::Medinan),
    surah(10, "سُورَةُ يُونُسَ", "Yunus", "Jonas", 109, Revelation::Meccan),
    surah(11, "سُورَةُ هُودٍ", "Hud", "Hud", 123, Revelation::Meccan),
    surah(12, "سُورَةُ يُوسُفَ", "Yusuf", "Joseph", 111, Revelation::Meccan),
    surah(13, "سُورَةُ الرَّعۡدِ", "Ar-Ra'd", "The Thunder", 43, Revelation::Medinan),
    surah(14, "سُورَةُ إِبۡرَاهِيمَ", "Ibrahim", "Abraham", 52, Revelation::Meccan),
    surah(15, "سُورَةُ الحِجۡرِ", "Al-Hijr", "The Rock", 99, Revelation::Meccan),
    surah(16, "سُورَةُ النَّحۡلِ", "An-Nahl", "The Bee", 128, Revelation::Meccan),
    surah(17, "سُورَةُ الإِسۡرَاءِ", "Al-Israa", "The Night Journey", 111, Revelation::Meccan),
    surah(18, "سُورَةُ الكَهۡفِ", "Al-Kahf", "The Cave", 110, Revelation::Meccan),
    surah(19, "سُورَةُ مَرۡيَمَ", "Maryam", "Mary", 98, Revelation::Meccan),
    surah(20, "سُورَةُ طه", "Taa-Haa", "Taa-Haa", 135, Revelation::Meccan),
    surah(21, "سُورَةُ الأَنبِيَاءِ", "Al-Anbiyaa", "The Prophets", 112, Revelation::Meccan),
    surah(22, "سُورَةُ الحَجِّ", "Al-Hajj", "The Pilgrimage", 78, Revelation::Medinan),
    surah(23, "سُورَةُ المُؤۡمِنُونَ", "Al-Muminoon", "The Believers", 118, Revelation::Meccan),
    surah(24, "سُورَةُ النُّورِ", "An-Noor", "The Light", 64, Revelation::Medinan),
    surah(25, "سُورَةُ الفُرۡقَانِ", "Al-Furqaan", "The Criterion", 77, Revelation::Meccan),
    surah(26, "سُورَةُ الشُّعَرَاءِ", "Ash-Shu'araa", "The Poets", 227, Revelation::Meccan),
    surah(27, "سُورَةُ النَّمۡلِ", "An-Naml", "The Ant", 93, Revelation::Meccan),
    surah(28, "سُورَةُ القَصَصِ", "Al-Qasas", "The Stories", 88, Revelation::Meccan),
    surah(29, "سُورَةُ العَنكَبُوتِ", "Al-Ankaboot", "The Spider", 69, Revelation::Meccan),
    surah(30, "سُورَةُ الرُّومِ", "Ar-Room", "The Romans", 60, Revelation::Meccan),
    surah(31, "سُورَةُ لُقۡمَانَ", "Luqman", "Luqman", 34, Revelation::Meccan),
    surah(32, "سُورَةُ السَّجۡدَةِ", "As-Sajda", "The Prostration", 30, Revelation::Meccan),
    surah(33, "سُورَةُ الأَحۡزَابِ", "Al-Ahzaab", "The Clans", 73, Revelation::Medinan),
    surah(34, "سُورَةُ سَبَإٍ", "Saba", "Sheba", 54, Revelation::Meccan),
    surah(35, "سُورَةُ فَاطِرٍ", "Faatir", "The Originator", 45, Revelation::Meccan),
    surah(36, "سُورَةُ يسٓ", "Yaseen", "Yaseen", 83, Revelation::Meccan),
    surah(37, "سُورَةُ الصَّافَّاتِ", "As-Saaffaat", "Those drawn up in Ranks", 182, Revelation::Meccan),
    surah(38, "سُورَةُ صٓ", "Saad", "The letter Saad", 88, Revelation::Meccan),
    surah(39, "سُورَةُ الزُّمَرِ", "Az-Zumar", "The Groups", 75, Revelation::Meccan),
    surah(40, "سُورَةُ غَافِرٍ", "Ghafir", "The Forgiver", 85, Revelation::Meccan),
    surah(41, "سُورَةُ فُصِّلَتۡ", "Fussilat", "Explained in detail", 54, Revelation::Meccan),
    surah(42, "سُورَةُ الشُّورَىٰ", "Ash-Shura", "Consultation", 53, Revelation::Meccan),
    surah(43, "سُورَةُ الزُّخۡرُفِ", "Az-Zukhruf", "Ornaments of gold", 89, Revelation::Meccan),
    surah(44, "سُورَةُ الدُّخَانِ", "Ad-Dukhaan", "The Smoke", 59, Revelation::Meccan),
    surah(45, "سُورَةُ الجَاثِيَةِ", "Al-Jaathiya", "Crouching", 37, Revelation::Meccan),
    surah(46, "سُورَةُ الأَحۡقَافِ", "Al-Ahqaf", "The Dunes", 35, Revelation::Meccan),
    surah(47, "سُورَةُ مُحَمَّدٍ", "Muhammad", "Muhammad", 38, Revelation::Medinan),
    surah(48, "سُورَةُ الفَتۡحِ", "Al-Fath", "The Victory", 29, Revelation::Medinan),
    surah(49, "سُورَةُ الحُجُرَاتِ", "Al-Hujuraat", "The Inner Apartments", 18, Revelation::Medinan),
    surah(50, "سُورَةُ قٓ", "Qaaf", "The letter Qaaf", 45, Revelation::Meccan),
    surah(51, "سُورَةُ الذَّارِيَاتِ", "Adh-Dhaariyat", "The Winnowing Winds", 60, Revelation::Meccan),
    surah(52, "سُورَةُ الطُّورِ", "At-Tur", "The Mount", 49, Revelation::Meccan),
    surah(53, "سُورَةُ النَّجۡمِ", "An-Najm", "The Star", 62, Revelation::Meccan),
    surah(54, "سُورَةُ القَمَرِ", "Al-Qamar", "The Moon", 55, Revelation::Meccan),
    surah(55, "سُورَةُ الرَّحۡمَٰن", "Ar-Rahmaan", "The Beneficent", 78, Revelation::Medinan),
    surah(56, "سُورَةُ الوَاقِعَةِ", "Al-Waaqia", "The Inevitable", 96, Revelation::Meccan),
    surah(57, "سُورَةُ الحَدِيدِ", "Al-Hadid", "The Iron", 29, Revelation::Medinan),
    surah(58, "سُورَةُ المُجَادلَةِ", "Al-Mujaadila", "The Pleading Woman", 22, Revelation::Medinan),
    surah(59, "سُورَةُ الحَشۡرِ", "Al-Hashr", "The Exile", 24, Revelation::Medinan),
    surah(60, "سُورَةُ المُمۡتَحنَةِ", "Al-Mumtahana", "She that is to be examined", 13, Revelation::Medinan),
    surah(61, "سُورَةُ الصَّفِّ", "As-Saff", "The Ranks", 14, Revelation::Medinan),
    surah(62, "سُورَةُ الجُمُعَةِ", "Al-Jumu'a", "Friday", 11, Revelation::Medinan),
    surah(63, "سُورَةُ المُنَافِقُونَ", "Al-Munaafiqoon", "The Hypocrites", 11, Revelation::Medinan),
    surah(64, "سُورَةُ التَّغَابُنِ", "At-Taghaabun", "Mutual Disillusion", 18, Revelation::Medinan),
    surah(65, "سُورَةُ الطَّلَاقِ", "At-Talaaq", "Divorce", 12, Revelation::Medinan),
    surah(66, "سُورَةُ التَّحۡرِيمِ", "At-Tahrim", "The Prohibition", 12, Revelation::Medinan),
    surah(67, "سُورَةُ المُلۡكِ", "Al-Mulk", "The Sovereignty", 30, Revelation::Meccan),
    surah(68, "سُورَةُ القَلَمِ", "Al-Qalam", "The Pen", 52, Revelation::Meccan),
    surah(69, "سُورَةُ الحَاقَّةِ", "Al-Haaqqa", "The Reality", 52, Revelation::Meccan),
    surah(70, "سُورَةُ المَعَارِجِ", "Al-Ma'aarij", "The Ascending Stairways", 44, Revelation::Meccan),
    surah(71, "سُورَةُ نُوحٍ", "Nooh", "Noah", 28, Revelation::Meccan),
    surah(72, "سُورَةُ الجِنِّ", "Al-Jinn", "The Jinn", 28, Revelation::Meccan),
    surah(73, "سُورَةُ المُزَّمِّلِ", "Al-Muzzammil", "The Enshrouded One", 20, Revelation::Meccan),
    surah(74, "سُورَةُ المُدَّثِّرِ", "Al-Muddaththir", "The Cloaked One", 56, Revelation::Meccan),
    surah(75, "سُورَةُ القِيَامَةِ", "Al-Qiyaama", "The Resurrection", 40, Revelation::Meccan),
    surah(76, "سُورَةُ الإِنسَانِ", "Al-Insaan", "Man", 31, Revelation::Medinan),
    surah(77, "سُورَةُ المُرۡسَلَاتِ", "Al-Mursalaat", "The Emissaries", 50, Revelation::Meccan),
    surah(78, "سُورَةُ النَّبَإِ", "An-Naba", "The Announcement", 40, Revelation::Meccan),
    surah(79, "سُورَةُ النَّازِعَاتِ", "An-Naazi'aat", "Those who drag forth", 46, Revelation::Meccan),
    surah(80, "سُورَةُ عَبَسَ", "Abasa", "He frowned", 42, Revelation::Meccan),
    surah(81, "سُورَةُ التَّكۡوِيرِ", "At-Takwir", "The Overthrowing", 29, Revelation::Meccan),
    surah(82, "سُورَةُ الانفِطَارِ", "Al-Infitaar", "The Cleaving", 19, Revelation::Meccan),
    surah(83, "سُورَةُ المُطَفِّفِينَ", "Al-Mutaffifin", "Defrauding", 36, Revelation::Meccan),
    surah(84, "سُورَةُ الانشِقَاقِ", "Al-Inshiqaaq", "The Splitting Open", 25, Revelation::Meccan),
    surah(85, "سُورَةُ البُرُوجِ", "Al-Burooj", "The Constellations", 22, Revelation::Meccan),
    surah(86, "سُورَةُ الطَّارِقِ", "At-Taariq", "The Morning Star", 17, Revelation::Meccan),
    surah(87, "سُورَةُ الأَعۡلَىٰ", "Al-A'laa", "The Most High", 19, Revelation::Meccan),
    surah(88, "سُورَةُ الغَاشِيَةِ", "Al-Ghaashiya", "The Overwhelming", 26, Revelation::Meccan),
    surah(89, "سُورَةُ الفَجۡرِ", "Al-Fajr", "The Dawn", 30, Revelation::Meccan),
    surah(90, "سُورَةُ البَلَدِ", "Al-Balad", "The City", 20, Revelation::Meccan),
    surah(91, "سُورَةُ الشَّمۡسِ", "Ash-Shams", "The Sun", 15, Revelation::Meccan),
    surah(92, "سُورَةُ اللَّيۡلِ", "Al-Lail", "The Night", 21, Revelation::Meccan),
    surah(93, "سُورَةُ الضُّحَىٰ", "Ad-Dhuhaa", "The Morning Hours", 11, Revelation::Meccan),
    surah(94, "سُورَةُ الشَّرۡحِ", "Ash-Sharh", "The Consolation", 8, Revelation::Meccan),
    surah(95, "سُورَةُ التِّينِ", "At-Tin", "The Fig", 8, Revelation::Meccan),
    surah(96, "سُورَةُ العَلَقِ", "Al-Alaq", "The Clot", 19, Revelation::Meccan),
    surah(97, "سُورَةُ القَدۡرِ", "Al-Qadr", "The Power, Fate", 5, Revelation::Meccan),
    surah(98, "سُورَةُ البَيِّنَةِ", "Al-Bayyina", "The Evidence", 8, Revelation::Medinan),
    surah(99, "سُورَةُ الزَّلۡزَلَةِ", "Az-Zalzala", "The Earthquake", 8, Revelation::Medinan),
    surah(100, "سُورَةُ العَادِيَاتِ", "Al-Aadiyaat", "The Chargers", 11, Revelation::Meccan),
    surah(101, "سُورَةُ القَارِعَةِ", "Al-Qaari'a", "The Calamity", 11, Revelation::Meccan),
    surah(102, "سُورَةُ التَّكَاثُرِ", "At-Takaathur", "Competition", 8, Revelation::Meccan),
    surah(103, "سُورَةُ العَصۡرِ", "Al-Asr", "The Declining Day, Epoch", 3, Revelation::Meccan),
    surah(104, "سُورَةُ الهُمَزَةِ", "Al-Humaza", "The Traducer", 9, Revelation::Meccan),
    surah(105, "سُورَةُ الفِيلِ", "Al-Fil", "The Elephant", 5, Revelation::Meccan),
    surah(106, "سُورَةُ قُرَيۡشٍ", "Quraish", "Quraysh", 4, Revelation::Meccan),
    surah(107, "سُورَةُ المَاعُونِ", "Al-Maa'un", "Almsgiving", 7, Revelation::Meccan),
    surah(108, "سُورَةُ الكَوۡثَرِ", "Al-Kawthar", "Abundance", 3, Revelation::Meccan),
    surah(109, "سُورَةُ الكَافِرُونَ", "Al-Kaafiroon", "The Disbelievers", 6, Revelation::Meccan),
    surah(110, "سُورَةُ النَّصۡرِ", "An-Nasr", "Divine Support", 3, Revelation::Medinan),
    surah(111, "سُورَةُ المَسَدِ", "Al-Masad", "The Palm Fibre", 5, Revelation::Meccan),
    surah(112, "سُورَةُ الإِخۡلَاصِ", "Al-Ikhlaas", "Sincerity", 4, Revelation::Meccan),
    surah(113, "سُورَةُ الفَلَقِ", "Al-Falaq", "The Dawn", 5, Revelation::Meccan),
    surah(114, "سُورَةُ النَّاسِ", "An-Naas", "Mankind", 6, Revelation::Meccan),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_canonical_order() {
        for (i, s) in SURAHS.iter().enumerate() {
            assert_eq!(usize::from(s.number), i + 1);
            assert!(s.ayah_count > 0);
        }
    }

    #[test]
    fn test_total_ayahs() {
        let total: u32 = SURAHS.iter().map(|s| u32::from(s.ayah_count)).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(ayah_count(1), 7);
        assert_eq!(ayah_count(2), 286);
        assert_eq!(ayah_count(13), 43);
        assert_eq!(ayah_count(114), 6);
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(surah_by_number(0).is_none());
        assert!(surah_by_number(115).is_none());
        assert_eq!(surah_by_number(13).unwrap().english_name, "Ar-Ra'd");
        assert_eq!(surah_by_number(13).unwrap().revelation, Revelation::Medinan);
    }

    #[test]
    fn test_revelation_from_str() {
        assert_eq!(Revelation::from_str("Meccan"), Some(Revelation::Meccan));
        assert_eq!(Revelation::from_str("medinan"), Some(Revelation::Medinan));
        assert_eq!(Revelation::from_str("other"), None);
    }
}
