//! Language codes accepted by the Google web-translate endpoint.

/// Sentinel asking the provider to detect the source language
pub const AUTO_DETECT: &str = "auto";

pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

// Codes the endpoint accepts under a different spelling
const ALIASES: &[(&str, &str)] = &[("ee", "et"), ("zh", "zh-cn")];

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Normalise a caller-supplied language code or name.
///
/// Returns `None` when the value is neither a known code, an alias, nor a
/// language name. `auto` passes through unchanged.
pub fn normalize(lang: &str) -> Option<String> {
    let lang = lang.trim().to_lowercase().replace('_', "-");
    if lang == AUTO_DETECT {
        return Some(lang);
    }

    if let Some((_, code)) = ALIASES.iter().find(|(alias, _)| *alias == lang) {
        return Some(code.to_string());
    }

    if is_supported(&lang) {
        return Some(lang);
    }

    LANGUAGES
        .iter()
        .find(|(_, name)| *name == lang)
        .map(|(code, _)| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_lowercased() {
        assert_eq!(normalize("zh-CN").as_deref(), Some("zh-cn"));
        assert_eq!(normalize("zh_TW").as_deref(), Some("zh-tw"));
        assert_eq!(normalize(" ES ").as_deref(), Some("es"));
    }

    #[test]
    fn names_and_aliases_resolve_to_codes() {
        assert_eq!(normalize("Spanish").as_deref(), Some("es"));
        assert_eq!(normalize("ee").as_deref(), Some("et"));
        assert_eq!(normalize("zh").as_deref(), Some("zh-cn"));
    }

    #[test]
    fn auto_passes_through() {
        assert_eq!(normalize("AUTO").as_deref(), Some(AUTO_DETECT));
        assert!(!is_supported(AUTO_DETECT));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(normalize("xx").is_none());
        assert!(normalize("").is_none());
    }
}
