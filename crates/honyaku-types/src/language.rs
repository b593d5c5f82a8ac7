//! Language tags supported by the translation engine.

use std::fmt;

/// A language the engine can translate between.
///
/// Callers identify languages by their two-letter ISO 639-1 code
/// ("en", "es"); the enum is the engine-side tag the code resolves to.
/// The mapping is one-to-one in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Belarusian,
    Bengali,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Galician,
    Georgian,
    German,
    Greek,
    Gujarati,
    HaitianCreole,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kannada,
    Korean,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Maltese,
    Marathi,
    Norwegian,
    Persian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Slovak,
    Slovenian,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Telugu,
    Thai,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
}

impl Language {
    /// Every supported language. Model enumeration walks this list.
    pub const ALL: [Language; 59] = [
        Language::Afrikaans,
        Language::Albanian,
        Language::Arabic,
        Language::Belarusian,
        Language::Bengali,
        Language::Bulgarian,
        Language::Catalan,
        Language::Chinese,
        Language::Croatian,
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Esperanto,
        Language::Estonian,
        Language::Finnish,
        Language::French,
        Language::Galician,
        Language::Georgian,
        Language::German,
        Language::Greek,
        Language::Gujarati,
        Language::HaitianCreole,
        Language::Hebrew,
        Language::Hindi,
        Language::Hungarian,
        Language::Icelandic,
        Language::Indonesian,
        Language::Irish,
        Language::Italian,
        Language::Japanese,
        Language::Kannada,
        Language::Korean,
        Language::Latvian,
        Language::Lithuanian,
        Language::Macedonian,
        Language::Malay,
        Language::Maltese,
        Language::Marathi,
        Language::Norwegian,
        Language::Persian,
        Language::Polish,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Slovak,
        Language::Slovenian,
        Language::Spanish,
        Language::Swahili,
        Language::Swedish,
        Language::Tagalog,
        Language::Tamil,
        Language::Telugu,
        Language::Thai,
        Language::Turkish,
        Language::Ukrainian,
        Language::Urdu,
        Language::Vietnamese,
        Language::Welsh,
    ];

    /// Resolve a two-letter code to its language tag.
    ///
    /// Returns `None` for unrecognized codes; the caller decides how to
    /// surface that. "tl" resolves to Tagalog, which also covers the
    /// Filipino label.
    pub fn from_code(code: &str) -> Option<Language> {
        let language = match code {
            "af" => Language::Afrikaans,
            "sq" => Language::Albanian,
            "ar" => Language::Arabic,
            "be" => Language::Belarusian,
            "bn" => Language::Bengali,
            "bg" => Language::Bulgarian,
            "ca" => Language::Catalan,
            "zh" => Language::Chinese,
            "hr" => Language::Croatian,
            "cs" => Language::Czech,
            "da" => Language::Danish,
            "nl" => Language::Dutch,
            "en" => Language::English,
            "eo" => Language::Esperanto,
            "et" => Language::Estonian,
            "fi" => Language::Finnish,
            "fr" => Language::French,
            "gl" => Language::Galician,
            "ka" => Language::Georgian,
            "de" => Language::German,
            "el" => Language::Greek,
            "gu" => Language::Gujarati,
            "ht" => Language::HaitianCreole,
            "he" => Language::Hebrew,
            "hi" => Language::Hindi,
            "hu" => Language::Hungarian,
            "is" => Language::Icelandic,
            "id" => Language::Indonesian,
            "ga" => Language::Irish,
            "it" => Language::Italian,
            "ja" => Language::Japanese,
            "kn" => Language::Kannada,
            "ko" => Language::Korean,
            "lv" => Language::Latvian,
            "lt" => Language::Lithuanian,
            "mk" => Language::Macedonian,
            "ms" => Language::Malay,
            "mt" => Language::Maltese,
            "mr" => Language::Marathi,
            "no" => Language::Norwegian,
            "fa" => Language::Persian,
            "pl" => Language::Polish,
            "pt" => Language::Portuguese,
            "ro" => Language::Romanian,
            "ru" => Language::Russian,
            "sk" => Language::Slovak,
            "sl" => Language::Slovenian,
            "es" => Language::Spanish,
            "sw" => Language::Swahili,
            "sv" => Language::Swedish,
            "tl" => Language::Tagalog,
            "ta" => Language::Tamil,
            "te" => Language::Telugu,
            "th" => Language::Thai,
            "tr" => Language::Turkish,
            "uk" => Language::Ukrainian,
            "ur" => Language::Urdu,
            "vi" => Language::Vietnamese,
            "cy" => Language::Welsh,
            _ => return None,
        };
        Some(language)
    }

    /// The two-letter code for this language, the inverse of
    /// [`Language::from_code`].
    pub fn code(&self) -> &'static str {
        match self {
            Language::Afrikaans => "af",
            Language::Albanian => "sq",
            Language::Arabic => "ar",
            Language::Belarusian => "be",
            Language::Bengali => "bn",
            Language::Bulgarian => "bg",
            Language::Catalan => "ca",
            Language::Chinese => "zh",
            Language::Croatian => "hr",
            Language::Czech => "cs",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Esperanto => "eo",
            Language::Estonian => "et",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Galician => "gl",
            Language::Georgian => "ka",
            Language::German => "de",
            Language::Greek => "el",
            Language::Gujarati => "gu",
            Language::HaitianCreole => "ht",
            Language::Hebrew => "he",
            Language::Hindi => "hi",
            Language::Hungarian => "hu",
            Language::Icelandic => "is",
            Language::Indonesian => "id",
            Language::Irish => "ga",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Kannada => "kn",
            Language::Korean => "ko",
            Language::Latvian => "lv",
            Language::Lithuanian => "lt",
            Language::Macedonian => "mk",
            Language::Malay => "ms",
            Language::Maltese => "mt",
            Language::Marathi => "mr",
            Language::Norwegian => "no",
            Language::Persian => "fa",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Slovak => "sk",
            Language::Slovenian => "sl",
            Language::Spanish => "es",
            Language::Swahili => "sw",
            Language::Swedish => "sv",
            Language::Tagalog => "tl",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Thai => "th",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Urdu => "ur",
            Language::Vietnamese => "vi",
            Language::Welsh => "cy",
        }
    }

    /// Human-readable English name, used for display.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Afrikaans => "Afrikaans",
            Language::Albanian => "Albanian",
            Language::Arabic => "Arabic",
            Language::Belarusian => "Belarusian",
            Language::Bengali => "Bengali",
            Language::Bulgarian => "Bulgarian",
            Language::Catalan => "Catalan",
            Language::Chinese => "Chinese",
            Language::Croatian => "Croatian",
            Language::Czech => "Czech",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::Esperanto => "Esperanto",
            Language::Estonian => "Estonian",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::Galician => "Galician",
            Language::Georgian => "Georgian",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Gujarati => "Gujarati",
            Language::HaitianCreole => "Haitian Creole",
            Language::Hebrew => "Hebrew",
            Language::Hindi => "Hindi",
            Language::Hungarian => "Hungarian",
            Language::Icelandic => "Icelandic",
            Language::Indonesian => "Indonesian",
            Language::Irish => "Irish",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Kannada => "Kannada",
            Language::Korean => "Korean",
            Language::Latvian => "Latvian",
            Language::Lithuanian => "Lithuanian",
            Language::Macedonian => "Macedonian",
            Language::Malay => "Malay",
            Language::Maltese => "Maltese",
            Language::Marathi => "Marathi",
            Language::Norwegian => "Norwegian",
            Language::Persian => "Persian",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Romanian => "Romanian",
            Language::Russian => "Russian",
            Language::Slovak => "Slovak",
            Language::Slovenian => "Slovenian",
            Language::Spanish => "Spanish",
            Language::Swahili => "Swahili",
            Language::Swedish => "Swedish",
            Language::Tagalog => "Tagalog",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Thai => "Thai",
            Language::Turkish => "Turkish",
            Language::Ukrainian => "Ukrainian",
            Language::Urdu => "Urdu",
            Language::Vietnamese => "Vietnamese",
            Language::Welsh => "Welsh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
