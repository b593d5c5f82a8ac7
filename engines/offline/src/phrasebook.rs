use honyaku_types::Language;
use honyaku_types::Language::{English, French, German, Spanish};

/// (source, target, text, translation)
const PHRASES: &[(Language, Language, &str, &str)] = &[
    (English, Spanish, "Hello, how are you today?", "Hola, ¿cómo estás hoy?"),
    (English, Spanish, "Hello", "Hola"),
    (English, Spanish, "Good morning", "Buenos días"),
    (English, Spanish, "Thank you", "Gracias"),
    (English, Spanish, "Goodbye", "Adiós"),
    (English, Spanish, "How are you?", "¿Cómo estás?"),
    (Spanish, English, "Hola", "Hello"),
    (Spanish, English, "Gracias", "Thank you"),
    (Spanish, English, "Adiós", "Goodbye"),
    (English, French, "Hello, how are you today?", "Bonjour, comment allez-vous aujourd'hui ?"),
    (English, French, "Hello", "Bonjour"),
    (English, French, "Thank you", "Merci"),
    (English, French, "Goodbye", "Au revoir"),
    (French, English, "Bonjour", "Hello"),
    (French, English, "Merci", "Thank you"),
    (English, German, "Hello, how are you today?", "Hallo, wie geht es dir heute?"),
    (English, German, "Hello", "Hallo"),
    (English, German, "Thank you", "Danke"),
    (English, German, "Goodbye", "Auf Wiedersehen"),
    (German, English, "Hallo", "Hello"),
    (German, English, "Danke", "Thank you"),
];

/// Look up a canned translation for the pair. Matching ignores
/// surrounding whitespace and ASCII case.
pub fn lookup(source: Language, target: Language, text: &str) -> Option<&'static str> {
    let text = text.trim();
    PHRASES
        .iter()
        .find(|(s, t, phrase, _)| {
            *s == source && *t == target && phrase.eq_ignore_ascii_case(text)
        })
        .map(|(_, _, _, translation)| *translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_phrase() {
        assert_eq!(lookup(English, Spanish, "Hello"), Some("Hola"));
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        assert_eq!(lookup(English, Spanish, "  hello "), Some("Hola"));
    }

    #[test]
    fn pair_direction_matters() {
        assert_eq!(lookup(Spanish, English, "Hello"), None);
    }

    #[test]
    fn unknown_phrase_is_none() {
        assert_eq!(lookup(English, Spanish, "The weather is nice"), None);
    }
}
