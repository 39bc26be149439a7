//! Internationalisation (i18n)
//!
//! Translations are addressed by stable string keys (`"title"`, `"navOverview"`, ...).
//! Each language ships a compiled-in entry list; English is complete and is the
//! fallback for every other language. A JSON resource of the same shape can be
//! merged over the built-ins at startup.
//!
//! Resolution is total: `active language -> English -> the key itself`.

mod bn;
mod en;
mod hi;
mod mr;
mod table;
mod ta;
mod te;

pub use table::{TranslationTable, Translator};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
    /// Bengali
    Bn,
    /// Marathi
    Mr,
    /// Telugu
    Te,
    /// Tamil
    Ta,
}

impl Language {
    /// The fallback language for missing keys
    pub const FALLBACK: Language = Language::En;

    /// All supported languages, in picker order
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Hi,
            Language::Bn,
            Language::Mr,
            Language::Te,
            Language::Ta,
        ]
    }

    /// Display name written in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Bn => "বাংলা",
            Language::Mr => "मराठी",
            Language::Te => "తెలుగు",
            Language::Ta => "தமிழ்",
        }
    }

    /// Language code (ISO 639-1)
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Mr => "mr",
            Language::Te => "te",
            Language::Ta => "ta",
        }
    }

    /// Parse a language code.
    ///
    /// Accepts bare codes and region-tagged forms (`en-US`, `hi_IN`), case-insensitively.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == primary)
    }

    /// Position in [`Language::all`]
    pub fn index(self) -> usize {
        Language::all()
            .iter()
            .position(|lang| *lang == self)
            .unwrap_or_default()
    }

    /// Next language (wrapping, for cycling)
    #[must_use]
    pub fn next(self) -> Language {
        let all = Language::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous language (wrapping, for cycling)
    #[must_use]
    pub fn prev(self) -> Language {
        let all = Language::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Compiled-in entries for this language
    pub(crate) fn builtin_entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => en::ENTRIES,
            Language::Hi => hi::ENTRIES,
            Language::Bn => bn::ENTRIES,
            Language::Mr => mr::ENTRIES,
            Language::Te => te::ENTRIES,
            Language::Ta => ta::ENTRIES,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_variants() {
        assert_eq!(Language::from_code("hi"), Some(Language::Hi));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("TA_in"), Some(Language::Ta));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_code_round_trip_for_all() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Language::Ta.next(), Language::En);
        assert_eq!(Language::En.prev(), Language::Ta);
        assert_eq!(Language::Hi.next().prev(), Language::Hi);
    }
}
