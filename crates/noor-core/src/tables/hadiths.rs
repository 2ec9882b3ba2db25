//! Hadith identifiers and the languages hadeethenc.com serves them in.

/// Pool of hadeethenc.com hadith identifiers the random quote draws from.
///
/// These are contiguous id ranges around known-good ids such as 4176, not a
/// list checked against the remote. Gaps on hadeethenc.com mean some draws
/// come back absent; the quote loop redraws those, bounded by
/// `Settings::max_hadith_attempts`.
pub static HADITH_IDS: &[u32] = &[
    2962, 2963, 2964, 2965, 2966, 2967, 2968, 2969, 2970, 2971, 2972, 2973, 2974, 2975, 2976,
    2977, 2978, 2979, 2980, 2981, 2982, 2983, 2984, 2985, 2986, 2987, 2988, 2989, 2990, 2991,
    2992, 2993, 2994, 2995, 2996, 2997, 2998, 2999, 3000, 3001, 3002, 3003, 3004, 3005, 3006,
    3007, 3008, 3009, 3010, 3011, 3012, 3013, 3014, 3015, 3016, 3017, 3018, 3019, 3020, 3021,
    3022, 3023, 3024, 3025, 3026, 3027, 3028, 3029, 3030, 3031, 3032, 3033, 3034, 3035, 3036,
    3037, 3038, 3039, 3040, 3041, 3042, 3043, 3044, 3045, 3046, 3047, 3048, 3049, 3050, 3051,
    3052, 3053, 3054, 3055, 3056, 3057, 3058, 3059, 3060, 3061, 3062, 3063, 3064, 3065, 3066,
    3067, 3068, 3069, 3070, 3071, 3072, 3073, 3074, 3075, 3076, 3077, 3078, 3079, 3080, 3081,
    3082, 3083, 3084, 3085, 3086, 3087, 3088, 3089, 3090, 3091, 3092, 3093, 3094, 3095, 3096,
    3097, 3098, 3099, 3100, 3101, 3102, 3103, 3104, 3105, 3106, 3107, 3108, 3109, 3110, 3111,
    3112, 3113, 3114, 3115, 3116, 3117, 3118, 3119, 3120, 3121, 3122, 3123, 3124, 3125, 3126,
    3127, 3128, 3129, 3130, 3131, 3132, 3133, 3134, 3135, 3136, 3137, 3138, 3139, 3140, 3141,
    3142, 3143, 3144, 3145, 3146, 3147, 3148, 3149, 3150, 4176, 4177, 4178, 4179, 4180, 4181,
    4182, 4183, 4184, 4185, 4186, 4187, 4188, 4189, 4190, 4191, 4192, 4193, 4194, 4195, 4196,
    4197, 4198, 4199, 4200, 4201, 4202, 4203, 4204, 4205, 4206, 4207, 4208, 4209, 4210, 4211,
    4212, 4213, 4214, 4215, 4216, 4217, 4218, 4219, 4220, 4221, 4222, 4223, 4224, 4225, 4226,
    4227, 4228, 4229, 4230, 4231, 4232, 4233, 4234, 4235, 4236, 4237, 4238, 4239, 4240, 5331,
    5332, 5333, 5334, 5335, 5336, 5337, 5338, 5339, 5340, 5341, 5342, 5343, 5344, 5345, 5346,
    5347, 5348, 5349, 5350, 5351, 5352, 5353, 5354, 5355, 5356, 5357, 5358, 5359, 5360, 5361,
    5362, 5363, 5364, 5365, 5366, 5367, 5368, 5369, 5370, 5371, 5372, 5373, 5374, 5375, 5376,
];

/// Languages hadeethenc.com publishes translations in: (code, English name, native name).
pub static HADITH_LANGUAGES: &[(&str, &str, &str)] = &[
    ("ar", "Arabic", "العربية"),
    ("en", "English", "English"),
    ("fr", "French", "Français"),
    ("es", "Spanish", "Español"),
    ("tr", "Turkish", "Türkçe"),
    ("ur", "Urdu", "اردو"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("bs", "Bosnian", "Bosanski"),
    ("ru", "Russian", "Русский"),
    ("bn", "Bengali", "বাংলা"),
    ("zh", "Chinese", "中文"),
    ("fa", "Persian", "فارسی"),
    ("tl", "Tagalog", "Tagalog"),
    ("hi", "Hindi", "हिन्दी"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("si", "Sinhala", "සිංහල"),
    ("ug", "Uyghur", "ئۇيغۇرچە"),
    ("ku", "Kurdish", "Kurdî"),
    ("ha", "Hausa", "Hausa"),
    ("pt", "Portuguese", "Português"),
    ("ml", "Malayalam", "മലയാളം"),
    ("te", "Telugu", "తెలుగు"),
    ("sw", "Swahili", "Kiswahili"),
    ("ps", "Pashto", "پښتو"),
    ("de", "German", "Deutsch"),
    ("ja", "Japanese", "日本語"),
];

pub fn is_hadith_language(code: &str) -> bool {
    HADITH_LANGUAGES.iter().any(|(c, _, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_has_no_duplicates() {
        let unique: HashSet<u32> = HADITH_IDS.iter().copied().collect();
        assert_eq!(unique.len(), HADITH_IDS.len());
        assert!(HADITH_IDS.contains(&4176));
    }

    #[test]
    fn test_languages() {
        assert!(is_hadith_language("ar"));
        assert!(is_hadith_language("en"));
        assert!(!is_hadith_language("xx"));
    }
}
