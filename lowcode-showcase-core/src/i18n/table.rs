//! Translation table and lookup

use std::collections::HashMap;
use std::path::Path;

use crate::error::{I18nError, I18nResult};

use super::Language;

/// Mapping `language -> key -> text`.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the compiled-in translations of every supported language
    pub fn builtin() -> Self {
        let entries = Language::all()
            .iter()
            .map(|lang| {
                let map = lang
                    .builtin_entries()
                    .iter()
                    .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
                    .collect();
                (*lang, map)
            })
            .collect();

        Self { entries }
    }

    /// Parse a JSON resource of the form `{ "hi": { "title": "..." } }`.
    ///
    /// Languages that are not supported are skipped. When regional variants share a
    /// language (`hi`, `hi-IN`), the exact code wins and variants apply in code order.
    pub fn from_json_str(json: &str) -> I18nResult<Self> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;

        let mut resources = Vec::with_capacity(raw.len());
        for (code, map) in raw {
            match Language::from_code(&code) {
                Some(lang) => {
                    let exact = code.eq_ignore_ascii_case(lang.code());
                    resources.push((lang, exact, code, map));
                }
                None => {
                    tracing::warn!("Skipping translations for unsupported language '{}'", code);
                }
            }
        }
        resources.sort_by(|a, b| (a.1, &a.2).cmp(&(b.1, &b.2)));

        let mut entries: HashMap<Language, HashMap<String, String>> = HashMap::new();
        for (lang, _, _, map) in resources {
            entries.entry(lang).or_default().extend(map);
        }

        Ok(Self { entries })
    }

    /// Read and parse a JSON resource file
    pub fn load_file(path: impl AsRef<Path>) -> I18nResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} translation entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Overlay `other` on top of this table; entries in `other` win.
    pub fn merge(&mut self, other: TranslationTable) {
        for (lang, map) in other.entries {
            self.entries.entry(lang).or_default().extend(map);
        }
    }

    /// Insert or replace a single entry
    pub fn insert(&mut self, language: Language, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(language)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Total number of entries across all languages
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether the table holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct lookup without fallback. Empty values count as missing.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|map| map.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Whether `language` has its own (non-empty) entry for `key`
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Resolve `key` for `language`.
    ///
    /// Falls back to [`Language::FALLBACK`], then to the key itself. Never fails.
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(text) = self.get(language, key) {
            return text;
        }

        if language != Language::FALLBACK {
            if let Some(text) = self.get(Language::FALLBACK, key) {
                tracing::debug!(
                    "Translation key '{}' missing for '{}', using fallback",
                    key,
                    language
                );
                return text;
            }
        }

        tracing::debug!("Missing translation key '{}', returning key as-is", key);
        key
    }

    /// Bind this table to a language
    pub fn translator(&self, language: Language) -> Translator<'_> {
        Translator {
            table: self,
            language,
        }
    }
}

/// A translation table bound to the active language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    language: Language,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable, language: Language) -> Self {
        Self { table, language }
    }

    /// Resolve a key in the bound language
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.table.resolve(self.language, key)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn table(&self) -> &'a TranslationTable {
        self.table
    }
}
