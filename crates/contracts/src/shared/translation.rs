//! Hardcoded "AI translation" results used by the content modals.
//!
//! There is no translation engine behind this: every target locale maps to a
//! fixed title/description pair.

/// Canned translation result for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubTranslation {
    pub locale: &'static str,
    pub language: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const STUB_TRANSLATIONS: &[StubTranslation] = &[
    StubTranslation {
        locale: "en",
        language: "English",
        title: "Translated title",
        description: "Automatically translated description.",
    },
    StubTranslation {
        locale: "de",
        language: "Deutsch",
        title: "Übersetzter Titel",
        description: "Automatisch übersetzte Beschreibung.",
    },
    StubTranslation {
        locale: "fr",
        language: "Français",
        title: "Titre traduit",
        description: "Description traduite automatiquement.",
    },
    StubTranslation {
        locale: "es",
        language: "Español",
        title: "Título traducido",
        description: "Descripción traducida automáticamente.",
    },
    StubTranslation {
        locale: "ru",
        language: "Русский",
        title: "Переведённый заголовок",
        description: "Автоматически переведённое описание.",
    },
];

pub fn stub_translation(locale: &str) -> Option<&'static StubTranslation> {
    STUB_TRANSLATIONS
        .iter()
        .find(|t| t.locale.eq_ignore_ascii_case(locale.trim()))
}

pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    STUB_TRANSLATIONS.iter().map(|t| t.locale)
}

pub fn language_name(locale: &str) -> &str {
    stub_translation(locale).map(|t| t.language).unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locale() {
        let t = stub_translation("DE").unwrap();
        assert_eq!(t.title, "Übersetzter Titel");
        assert_eq!(language_name("fr"), "Français");
    }

    #[test]
    fn test_unknown_locale() {
        assert!(stub_translation("jp").is_none());
        assert_eq!(language_name("jp"), "jp");
    }

    #[test]
    fn test_supported_locales() {
        let locales: Vec<_> = supported_locales().collect();
        assert_eq!(locales, vec!["en", "de", "fr", "es", "ru"]);
    }
}
