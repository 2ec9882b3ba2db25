//! Reciter and translation editions offered by alquran.cloud.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionFormat {
    Audio,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// One reciter or translator rendition, addressed by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edition {
    pub identifier: &'static str,
    pub language: &'static str,
    pub name: &'static str,
    pub english_name: &'static str,
    pub format: EditionFormat,
    pub direction: Option<Direction>,
}

const fn edition(
    identifier: &'static str,
    language: &'static str,
    name: &'static str,
    english_name: &'static str,
    format: EditionFormat,
    direction: Option<Direction>,
) -> Edition {
    Edition {
        identifier,
        language,
        name,
        english_name,
        format,
        direction,
    }
}

/// Reciters sorted by identifier, and translations grouped by language code.
#[derive(Debug, Clone)]
pub struct EditionCatalog {
    reciters: Vec<&'static Edition>,
    translations: BTreeMap<&'static str, Vec<&'static Edition>>,
}

impl EditionCatalog {
    pub fn new(reciters: &'static [Edition], translations: &'static [Edition]) -> Self {
        let mut sorted_reciters: Vec<&'static Edition> = reciters.iter().collect();
        sorted_reciters.sort_by(|a, b| a.identifier.cmp(b.identifier));

        let mut by_language: BTreeMap<&'static str, Vec<&'static Edition>> = BTreeMap::new();
        for translation in translations {
            by_language
                .entry(translation.language)
                .or_default()
                .push(translation);
        }
        for editions in by_language.values_mut() {
            editions.sort_by(|a, b| a.identifier.cmp(b.identifier));
            editions.dedup_by(|a, b| a.identifier == b.identifier);
        }

        Self {
            reciters: sorted_reciters,
            translations: by_language,
        }
    }

    pub fn reciters(&self) -> &[&'static Edition] {
        &self.reciters
    }

    pub fn reciter(&self, identifier: &str) -> Option<&'static Edition> {
        self.reciters
            .iter()
            .copied()
            .find(|e| e.identifier == identifier)
    }

    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.translations.keys().copied()
    }

    pub fn translations_for(&self, language: &str) -> &[&'static Edition] {
        self.translations
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First translation (by identifier) for a language.
    pub fn default_translation(&self, language: &str) -> Option<&'static Edition> {
        self.translations_for(language).first().copied()
    }

    pub fn translation(&self, identifier: &str) -> Option<&'static Edition> {
        self.translations
            .values()
            .flatten()
            .copied()
            .find(|e| e.identifier == identifier)
    }
}

impl Default for EditionCatalog {
    fn default() -> Self {
        Self::new(RECITERS, TRANSLATIONS)
    }
}

pub static RECITERS: &[Edition] = &[
    edition("ar.abdulbasitmurattal", "ar", "عبد الباسط عبد الصمد المرتل", "Abdul Basit", EditionFormat::Audio, None),
    edition("ar.abdullahbasfar", "ar", "عبد الله بصفر", "Abdullah Basfar", EditionFormat::Audio, None),
    edition("ar.abdurrahmaansudais", "ar", "عبدالرحمن السديس", "Abdurrahmaan As-Sudais", EditionFormat::Audio, None),
    edition("ar.abdulsamad", "ar", "عبدالباسط عبدالصمد", "Abdul Samad", EditionFormat::Audio, None),
    edition("ar.shaatree", "ar", "أبو بكر الشاطري", "Abu Bakr Ash-Shaatree", EditionFormat::Audio, None),
    edition("ar.ahmedajamy", "ar", "أحمد بن علي العجمي", "Ahmed ibn Ali al-Ajamy", EditionFormat::Audio, None),
    edition("ar.alafasy", "ar", "مشاري العفاسي", "Alafasy", EditionFormat::Audio, None),
    edition("ar.hanirifai", "ar", "هاني الرفاعي", "Hani Rifai", EditionFormat::Audio, None),
    edition("ar.husary", "ar", "محمود خليل الحصري", "Husary", EditionFormat::Audio, None),
    edition("ar.husarymujawwad", "ar", "محمود خليل الحصري (المجود)", "Husary (Mujawwad)", EditionFormat::Audio, None),
    edition("ar.hudhaify", "ar", "علي بن عبدالرحمن الحذيفي", "Hudhaify", EditionFormat::Audio, None),
    edition("ar.ibrahimakhbar", "ar", "إبراهيم الأخضر", "Ibrahim Akhdar", EditionFormat::Audio, None),
    edition("ar.mahermuaiqly", "ar", "ماهر المعيقلي", "Maher Al Muaiqly", EditionFormat::Audio, None),
    edition("ar.minshawi", "ar", "محمد صديق المنشاوي", "Minshawi", EditionFormat::Audio, None),
    edition("ar.minshawimujawwad", "ar", "محمد صديق المنشاوي (المجود)", "Minshawy (Mujawwad)", EditionFormat::Audio, None),
    edition("ar.muhammadayyoub", "ar", "محمد أيوب", "Muhammad Ayyoub", EditionFormat::Audio, None),
    edition("ar.muhammadjibreel", "ar", "محمد جبريل", "Muhammad Jibreel", EditionFormat::Audio, None),
    edition("ar.saoodshuraym", "ar", "سعود الشريم", "Saood bin Ibraaheem Ash-Shuraym", EditionFormat::Audio, None),
    edition("ar.parhizgar", "ar", "شهریار پرهیزگار", "Parhizgar", EditionFormat::Audio, None),
    edition("ar.aymanswoaid", "ar", "أيمن سويد", "Ayman Sowaid", EditionFormat::Audio, None),
];

pub static TRANSLATIONS: &[Edition] = &[
    edition("az.mammadaliyev", "az", "Məmmədəliyev & Bünyadov", "Vasim Mammadaliyev and Ziya Bunyadov", EditionFormat::Text, Some(Direction::Ltr)),
    edition("az.musayev", "az", "Musayev", "Alikhan Musayev", EditionFormat::Text, Some(Direction::Ltr)),
    edition("bn.bengali", "bn", "মুহিউদ্দীন খান", "Muhiuddin Khan", EditionFormat::Text, Some(Direction::Ltr)),
    edition("cs.hrbek", "cs", "Hrbek", "Preklad I. Hrbek", EditionFormat::Text, Some(Direction::Ltr)),
    edition("cs.nykl", "cs", "Nykl", "A. R. Nykl", EditionFormat::Text, Some(Direction::Ltr)),
    edition("de.aburida", "de", "Abu Rida", "Abu Rida Muhammad ibn Ahmad ibn Rassoul", EditionFormat::Text, Some(Direction::Ltr)),
    edition("de.bubenheim", "de", "Bubenheim & Elyas", "A. S. F. Bubenheim and N. Elyas", EditionFormat::Text, Some(Direction::Ltr)),
    edition("de.khoury", "de", "Khoury", "Adel Theodor Khoury", EditionFormat::Text, Some(Direction::Ltr)),
    edition("de.zaidan", "de", "Zaidan", "Amir Zaidan", EditionFormat::Text, Some(Direction::Ltr)),
    edition("dv.divehi", "dv", "ދިވެހި", "Office of the President of Maldives", EditionFormat::Text, Some(Direction::Rtl)),
    edition("en.ahmedali", "en", "Ahmed Ali", "Ahmed Ali", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.ahmedraza", "en", "Ahmed Raza Khan", "Ahmed Raza Khan", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.arberry", "en", "Arberry", "A. J. Arberry", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.asad", "en", "Asad", "Muhammad Asad", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.daryabadi", "en", "Daryabadi", "Abdul Majid Daryabadi", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.hilali", "en", "Hilali & Khan", "Muhammad Taqi-ud-Din al-Hilali and Muhammad Muhsin Khan", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.pickthall", "en", "Pickthall", "Mohammed Marmaduke William Pickthall", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.qaribullah", "en", "Qaribullah & Darwish", "Hasan al-Fatih Qaribullah and Ahmad Darwish", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.sahih", "en", "Saheeh International", "Saheeh International", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.sarwar", "en", "Sarwar", "Muhammad Sarwar", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.yusufali", "en", "Yusuf Ali", "Abdullah Yusuf Ali", EditionFormat::Text, Some(Direction::Ltr)),
    edition("fa.ayati", "fa", "آیتی", "AbdolMohammad Ayati", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.fooladvand", "fa", "فولادوند", "Mohammad Mahdi Fooladvand", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.ghomshei", "fa", "الهی قمشهای", "Mahdi Elahi Ghomshei", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.makarem", "fa", "مکارم شیرازی", "Naser Makarem Shirazi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fr.hamidullah", "fr", "Hamidullah", "Muhammad Hamidullah", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ha.gumi", "ha", "Gumi", "Abubakar Mahmoud Gumi", EditionFormat::Text, Some(Direction::Ltr)),
    edition("hi.hindi", "hi", "फ़ारूक़ ख़ान & नदवी", "Suhel Farooq Khan and Saifur Rahman Nadwi", EditionFormat::Text, Some(Direction::Ltr)),
    edition("id.indonesian", "id", "Bahasa Indonesia", "Unknown", EditionFormat::Text, Some(Direction::Ltr)),
    edition("it.piccardo", "it", "Piccardo", "Hamza Roberto Piccardo", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.ates", "tr", "Süleyman Ateş", "Suleyman Ates", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.bulac", "tr", "Alİ Bulaç", "Alİ Bulaç", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.diyanet", "tr", "Diyanet İşleri", "Diyanet Isleri", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.golpinarli", "tr", "Abdulbakî Gölpınarlı", "Abdulbaki Golpinarli", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.ozturk", "tr", "Öztürk", "Yasar Nuri Ozturk", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.vakfi", "tr", "Diyanet Vakfı", "Diyanet Vakfi", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.yazir", "tr", "Elmalılı Hamdi Yazır", "Elmalili Hamdi Yazir", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.yildirim", "tr", "Suat Yıldırım", "Suat Yildirim", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tr.yuksel", "tr", "Edip Yüksel", "Edip Yüksel", EditionFormat::Text, Some(Direction::Ltr)),
    edition("tt.nugman", "tt", "Yakub Ibn Nugman", "Yakub Ibn Nugman", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ug.saleh", "ug", "محمد صالح", "Muhammad Saleh", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.ahmedali", "ur", "احمد علی", "Ahmed Ali", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.jalandhry", "ur", "جالندہری", "Fateh Muhammad Jalandhry", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.jawadi", "ur", "علامہ جوادی", "Syed Zeeshan Haider Jawadi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.kanzuliman", "ur", "احمد رضا خان", "Ahmed Raza Khan", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.qadri", "ur", "طاہر القادری", "Tahir ul Qadri", EditionFormat::Text, Some(Direction::Rtl)),
    edition("uz.sodik", "uz", "Мухаммад Содик", "Muhammad Sodik Muhammad Yusuf", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.maududi", "en", "Maududi", "Abul Ala Maududi", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.shakir", "en", "Shakir", "Mohammad Habib Shakir", EditionFormat::Text, Some(Direction::Ltr)),
    edition("es.cortes", "es", "Cortes", "Julio Cortes", EditionFormat::Text, Some(Direction::Ltr)),
    edition("fa.ansarian", "fa", "انصاریان", "Hussain Ansarian", EditionFormat::Text, Some(Direction::Rtl)),
    edition("bg.theophanov", "bg", "Теофанов", "Tzvetan Theophanov", EditionFormat::Text, Some(Direction::Ltr)),
    edition("bs.mlivo", "bs", "Mlivo", "Mustafa Mlivo", EditionFormat::Text, Some(Direction::Ltr)),
    edition("fa.bahrampour", "fa", "بهرام پور", "Abolfazl Bahrampour", EditionFormat::Text, Some(Direction::Rtl)),
    edition("es.asad", "es", "Asad", "Muhammad Asad - Abdurrasak Pérez", EditionFormat::Text, Some(Direction::Ltr)),
    edition("fa.khorramshahi", "fa", "خرمشاهی", "Baha'oddin Khorramshahi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.mojtabavi", "fa", "مجتبوی", "Sayyed Jalaloddin Mojtabavi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("hi.farooq", "hi", "फ़ारूक़ ख़ान & अहमद", "Muhammad Farooq Khan and Muhammad Ahmed", EditionFormat::Text, Some(Direction::Ltr)),
    edition("id.muntakhab", "id", "Quraish Shihab", "Muhammad Quraish Shihab et al.", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ms.basmeih", "ms", "Basmeih", "Abdullah Muhammad Basmeih", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ru.abuadel", "ru", "Абу Адель", "Abu Adel", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ru.krachkovsky", "ru", "Крачковский", "Ignaty Yulianovich Krachkovsky", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ru.muntahab", "ru", "Аль-Мунтахаб", "Ministry of Awqaf, Egypt", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ru.sablukov", "ru", "Саблуков", "Gordy Semyonovich Sablukov", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ur.junagarhi", "ur", "محمد جوناگڑھی", "Muhammad Junagarhi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ur.maududi", "ur", "ابوالاعلی مودودی", "Abul A'ala Maududi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("zh.jian", "zh", "Ma Jian", "Ma Jian", EditionFormat::Text, Some(Direction::Ltr)),
    edition("zh.majian", "zh", "Ma Jian (Traditional)", "Ma Jian", EditionFormat::Text, Some(Direction::Ltr)),
    edition("fa.khorramdel", "fa", "خرمدل", "Mostafa Khorramdel", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.moezzi", "fa", "معزی", "Mohammad Kazem Moezzi", EditionFormat::Text, Some(Direction::Rtl)),
    edition("bs.korkut", "bs", "Korkut", "Besim Korkut", EditionFormat::Text, Some(Direction::Ltr)),
    edition("si.naseemismail", "si", "Naseem Ismail", "Naseem Isamil and Masoor Maulana, Kaleel", EditionFormat::Text, Some(Direction::Ltr)),
    edition("zh.mazhonggang", "zh", "Ma Zhong Gang", "马仲刚", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ba.mehanovic", "ba", "Kur'an - sa prevodom (značenja) na bosanski jezik, utemeljen na Ibn Kesirovom tumačenju, i kratki komentar", "Quran translation by Muhamed Mehanovic", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.itani", "en", "Clear Qur'an - Talal Itani", "Clear Qur'an by Talal Itani", EditionFormat::Text, Some(Direction::Ltr)),
    edition("my.ghazi", "my", "Ghazi Muhammed Hashim", "Translation by Ghazi Muhammed Hashim", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.mubarakpuri", "en", "Mubarakpuri", "Mubarakpuri", EditionFormat::Text, Some(Direction::Ltr)),
    edition("am.sadiq", "am", "ሳዲቅ & ሳኒ ሐቢብ", "ሳዲቅ & ሳኒ ሐቢብ", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ber.mensur", "ber", "At Mensur", "At Mensur", EditionFormat::Text, Some(Direction::Ltr)),
    edition("bn.hoque", "bn", "জহুরুল হক", "জহুরুল হক", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.qarai", "en", "Qarai", "Qarai", EditionFormat::Text, Some(Direction::Ltr)),
    edition("en.wahiduddin", "en", "Wahiduddin Khan", "Wahiduddin Khan", EditionFormat::Text, Some(Direction::Ltr)),
    edition("es.bornez", "es", "Bornez", "Bornez", EditionFormat::Text, Some(Direction::Ltr)),
    edition("es.garcia", "es", "Garcia", "Garcia", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ur.najafi", "ur", "محمد حسین نجفی", "محمد حسین نجفی", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.gharaati", "fa", "قرائتی", "قرائتی", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.sadeqi", "fa", "صادقی تهرانی", "صادقی تهرانی", EditionFormat::Text, Some(Direction::Rtl)),
    edition("fa.safavi", "fa", "صفوی", "صفوی", EditionFormat::Text, Some(Direction::Rtl)),
    edition("id.jalalayn", "id", "Tafsir Jalalayn", "Tafsir Jalalayn", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ml.karakunnu", "ml", "കാരകുന്ന് & എളയാവൂര്", "കാരകുന്ന് & എളയാവൂര്", EditionFormat::Text, Some(Direction::Ltr)),
    edition("nl.leemhuis", "nl", "Leemhuis", "Leemhuis", EditionFormat::Text, Some(Direction::Ltr)),
    edition("nl.siregar", "nl", "Siregar", "Siregar", EditionFormat::Text, Some(Direction::Ltr)),
    edition("ps.abdulwali", "ps", "عبدالولي", "عبدالولي", EditionFormat::Text, Some(Direction::Rtl)),
    edition("ru.kuliev-alsaadi", "ru", "Кулиев + ас-Саади", "Кулиев + ас-Саади", EditionFormat::Text, Some(Direction::Ltr)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciters_sorted() {
        let catalog = EditionCatalog::default();
        let ids: Vec<&str> = catalog.reciters().iter().map(|e| e.identifier).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(catalog.reciter("ar.abdulbasitmurattal").is_some());
        assert!(catalog.reciter("en.ahmedali").is_none());
    }

    #[test]
    fn test_translations_grouped_by_language() {
        let catalog = EditionCatalog::default();
        let english = catalog.translations_for("en");
        assert!(english.iter().all(|e| e.language == "en"));
        assert!(english.iter().any(|e| e.identifier == "en.ahmedali"));
        assert_eq!(catalog.default_translation("en").unwrap().identifier, "en.ahmedali");
        assert!(catalog.translations_for("xx").is_empty());
        assert!(catalog.default_translation("xx").is_none());
    }

    #[test]
    fn test_languages_are_unique_and_sorted() {
        let catalog = EditionCatalog::default();
        let languages: Vec<&str> = catalog.languages().collect();
        let mut expected = languages.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(languages, expected);
        assert!(languages.contains(&"fr"));
    }

    #[test]
    fn test_translation_lookup() {
        let catalog = EditionCatalog::default();
        let edition = catalog.translation("ps.abdulwali").unwrap();
        assert_eq!(edition.direction, Some(Direction::Rtl));
        assert_eq!(edition.format, EditionFormat::Text);
        assert!(catalog.translation("ar.abdulbasitmurattal").is_none());
    }
}
