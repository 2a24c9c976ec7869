//! Dominant-language detection.
//!
//! Detection is an injected capability so that callers can plug in a real
//! language-identification model and tests can substitute a deterministic
//! fake. The built-in [`ScriptDetector`] is a cheap script-counting
//! heuristic that distinguishes the two built-in phrase-table languages.

/// Oracle that names the dominant language of a text.
///
/// Implementations must be total: always return some language code, never
/// fail. Codes that the table registry cannot map fall back to English
/// downstream, so returning an unsupported code is harmless.
pub trait LanguageDetector: Send + Sync {
    /// Return an ISO-639-1-like code (e.g. `"en"`, `"ru"`) for `text`.
    fn detect_primary_language(&self, text: &str) -> String;
}

/// Script-counting detector: Cyrillic-dominant text is `"ru"`, everything
/// else `"en"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl LanguageDetector for ScriptDetector {
    fn detect_primary_language(&self, text: &str) -> String {
        let mut latin = 0usize;
        let mut cyrillic = 0usize;
        for ch in text.chars() {
            match ch {
                'a'..='z' | 'A'..='Z' => latin += 1,
                '\u{0400}'..='\u{04FF}' => cyrillic += 1,
                _ => {}
            }
        }
        if cyrillic > latin {
            "ru".to_string()
        } else {
            "en".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_english() {
        assert_eq!(ScriptDetector.detect_primary_language("Buy milk"), "en");
    }

    #[test]
    fn cyrillic_text_is_russian() {
        assert_eq!(ScriptDetector.detect_primary_language("Купи молоко"), "ru");
    }

    #[test]
    fn mixed_text_follows_the_dominant_script() {
        assert_eq!(
            ScriptDetector.detect_primary_language("Скачай файл README"),
            "ru"
        );
    }

    #[test]
    fn symbols_only_defaults_to_english() {
        assert_eq!(ScriptDetector.detect_primary_language("1 + 2 = 3"), "en");
    }
}
