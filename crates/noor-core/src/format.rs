//! Renders fetched records as markdown `[!Quote]` callouts.
//!
//! Everything here is a pure function of its inputs: the same record and
//! options always give the same bytes.

use serde::{Deserialize, Serialize};

use crate::models::{HadithRecord, QuranVerse};

/// Language of the headers and section titles around the quoted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceLanguage {
    /// Arabic.
    #[default]
    Native,
    /// English.
    Translated,
}

impl InterfaceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceLanguage::Native => "native",
            InterfaceLanguage::Translated => "translated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "native" | "ar" | "arabic" => Some(InterfaceLanguage::Native),
            "translated" | "en" | "english" => Some(InterfaceLanguage::Translated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_translation: bool,
    pub interface_language: InterfaceLanguage,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_translation: true,
            interface_language: InterfaceLanguage::Native,
        }
    }
}

struct HadithTitles {
    more: &'static str,
    explanation: &'static str,
    word_meanings: &'static str,
    benefits: &'static str,
}

const NATIVE_TITLES: HadithTitles = HadithTitles {
    more: "مزيد",
    explanation: "الشرح",
    word_meanings: "معاني الكلمات",
    benefits: "من فوائد الحديث",
};

const TRANSLATED_TITLES: HadithTitles = HadithTitles {
    more: "More",
    explanation: "Explanation",
    word_meanings: "Word meanings",
    benefits: "Benefits",
};

fn titles(language: InterfaceLanguage) -> &'static HadithTitles {
    match language {
        InterfaceLanguage::Native => &NATIVE_TITLES,
        InterfaceLanguage::Translated => &TRANSLATED_TITLES,
    }
}

/// Join the lines of `text` so that every continuation line carries `prefix`,
/// keeping multi-line text inside the callout.
fn continue_lines(text: &str, prefix: &str) -> String {
    text.trim_end()
        .lines()
        .collect::<Vec<_>>()
        .join(&format!("\n{}", prefix))
}

pub fn format_quran(
    verse: &QuranVerse,
    translation: Option<&QuranVerse>,
    options: &DisplayOptions,
) -> String {
    let mut out = String::new();

    if let Some(audio) = &verse.audio {
        out.push_str(&format!(
            "<audio src=\"{}\" controls>\n<p> Audio tag not supported </p>\n</audio>\n",
            audio
        ));
    }

    let reference = format!(
        "[[{s}:{a}](https://surahquran.com/english.php?sora={s}&aya={a})]",
        s = verse.surah,
        a = verse.ayah
    );
    let header = match options.interface_language {
        InterfaceLanguage::Native => format!(
            "{} ({}) - {}",
            verse.surah_name,
            verse.revelation.arabic_name(),
            reference
        ),
        InterfaceLanguage::Translated => format!(
            "\"{} Surah\" {} - {}",
            verse.revelation.as_str(),
            verse.surah_english_name,
            reference
        ),
    };
    out.push_str(&format!("> [!Quote] {}\n", header));
    out.push_str(">\n");
    out.push_str(&format!("> {}\n", continue_lines(&verse.text, "> ")));

    if options.show_translation {
        if let Some(translation) = translation {
            out.push_str(">\n");
            out.push_str(&format!("> {}\n", continue_lines(&translation.text, "> ")));
        }
    }

    out
}

pub fn format_hadith(record: &HadithRecord, options: &DisplayOptions) -> String {
    let titles = titles(options.interface_language);
    let mut lines = Vec::new();

    lines.push(format!(
        "> [!Quote] [{} - {}](https://hadeethenc.com/{}/browse/hadith/{})",
        record.grade, record.attribution, record.language, record.id
    ));
    lines.push(format!("> {}", continue_lines(&record.body, "> ")));
    lines.push(format!("> > [!Quote]+ {}", titles.more));
    lines.push(format!(
        ">> - **{}**: {}",
        titles.explanation,
        continue_lines(&record.explanation, ">> ")
    ));

    if let Some(meanings) = record.word_meanings.as_ref().filter(|m| !m.is_empty()) {
        lines.push(format!(">> - **{}**:", titles.word_meanings));
        for meaning in meanings {
            lines.push(format!(">>     - **{}**: {}", meaning.word.trim(), meaning.meaning.trim()));
        }
    }

    lines.push(format!(">> - **{}**:", titles.benefits));
    for benefit in record.benefits.iter().filter(|b| !b.trim().is_empty()) {
        lines.push(format!(">>     - {}", benefit.trim()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordMeaning;
    use crate::tables::Revelation;

    fn verse() -> QuranVerse {
        QuranVerse {
            surah: 13,
            ayah: 41,
            text: "أَوَلَمۡ يَرَوۡاْ".to_string(),
            audio: Some("https://cdn.example/1748.mp3".to_string()),
            surah_name: "سُورَةُ الرَّعۡدِ".to_string(),
            surah_english_name: "Ar-Ra'd".to_string(),
            revelation: Revelation::Medinan,
            edition: "ar.abdulbasitmurattal".to_string(),
        }
    }

    fn translation() -> QuranVerse {
        QuranVerse {
            text: "Do they not see".to_string(),
            audio: None,
            edition: "en.ahmedali".to_string(),
            ..verse()
        }
    }

    fn hadith() -> HadithRecord {
        HadithRecord {
            id: 4176,
            language: "ar".to_string(),
            title: "t".to_string(),
            body: "إنما الأعمال بالنيات".to_string(),
            attribution: "متفق عليه".to_string(),
            grade: "صحيح".to_string(),
            explanation: "شرح".to_string(),
            word_meanings: Some(vec![WordMeaning {
                word: "النيات".to_string(),
                meaning: "المقاصد".to_string(),
            }]),
            benefits: vec!["أولى".to_string(), "  ".to_string(), "ثانية".to_string()],
        }
    }

    const ENGLISH: DisplayOptions = DisplayOptions {
        show_translation: true,
        interface_language: InterfaceLanguage::Translated,
    };

    #[test]
    fn test_quran_translated_layout() {
        let out = format_quran(&verse(), Some(&translation()), &ENGLISH);
        let expected = "<audio src=\"https://cdn.example/1748.mp3\" controls>\n\
<p> Audio tag not supported </p>\n\
</audio>\n\
> [!Quote] \"Medinan Surah\" Ar-Ra'd - [[13:41](https://surahquran.com/english.php?sora=13&aya=41)]\n\
>\n\
> أَوَلَمۡ يَرَوۡاْ\n\
>\n\
> Do they not see\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_quran_native_header() {
        let out = format_quran(&verse(), Some(&translation()), &DisplayOptions::default());
        assert!(out.contains("> [!Quote] سُورَةُ الرَّعۡدِ (مدنية) - [[13:41]"));
    }

    #[test]
    fn test_quran_without_translation_has_no_trailing_quote_lines() {
        let options = DisplayOptions {
            show_translation: false,
            ..ENGLISH
        };
        let out = format_quran(&verse(), Some(&translation()), &options);
        assert!(!out.contains("Do they not see"));
        assert!(out.ends_with("> أَوَلَمۡ يَرَوۡاْ\n"));
        assert_eq!(out.matches("\n>\n").count(), 1);
    }

    #[test]
    fn test_quran_without_audio() {
        let mut v = verse();
        v.audio = None;
        let out = format_quran(&v, None, &ENGLISH);
        assert!(out.starts_with("> [!Quote]"));
        assert!(!out.contains("<audio"));
    }

    #[test]
    fn test_multiline_text_stays_in_callout() {
        let mut t = translation();
        t.text = "first\nsecond\n".to_string();
        let out = format_quran(&verse(), Some(&t), &ENGLISH);
        assert!(out.ends_with("> first\n> second\n"));
    }

    #[test]
    fn test_hadith_layout() {
        let out = format_hadith(&hadith(), &DisplayOptions::default());
        let expected = "> [!Quote] [صحيح - متفق عليه](https://hadeethenc.com/ar/browse/hadith/4176)\n\
> إنما الأعمال بالنيات\n\
> > [!Quote]+ مزيد\n\
>> - **الشرح**: شرح\n\
>> - **معاني الكلمات**:\n\
>>     - **النيات**: المقاصد\n\
>> - **من فوائد الحديث**:\n\
>>     - أولى\n\
>>     - ثانية\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_hadith_without_word_meanings() {
        let mut record = hadith();
        record.word_meanings = None;
        let out = format_hadith(&record, &ENGLISH);
        assert!(!out.contains("Word meanings"));
        assert!(out.contains(">> - **Explanation**: شرح\n>> - **Benefits**:"));

        record.word_meanings = Some(Vec::new());
        assert!(!format_hadith(&record, &ENGLISH).contains("Word meanings"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let record = hadith();
        assert_eq!(format_hadith(&record, &ENGLISH), format_hadith(&record, &ENGLISH));
        let v = verse();
        let t = translation();
        assert_eq!(
            format_quran(&v, Some(&t), &ENGLISH),
            format_quran(&v, Some(&t), &ENGLISH)
        );
    }

    #[test]
    fn test_interface_language_from_str() {
        assert_eq!(InterfaceLanguage::from_str("Arabic"), Some(InterfaceLanguage::Native));
        assert_eq!(InterfaceLanguage::from_str("translated"), Some(InterfaceLanguage::Translated));
        assert_eq!(InterfaceLanguage::from_str("klingon"), None);
    }
}
