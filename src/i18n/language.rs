//! Language type: validated handle onto a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A locale known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Locale code as used in file names and root keys (e.g. "en", "zh_CN")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let german = Language::from_code("de")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (source) language.
    ///
    /// Every target dictionary is derived from this one.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All translation targets, in processing order.
    pub fn targets() -> Vec<Language> {
        LanguageRegistry::get()
            .list_targets()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// Language built through `from_code`, `canonical`, `targets` or a constant.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language, as sent to the translation backend.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_german_constant() {
        let german = Language::GERMAN;
        assert_eq!(german.code(), "de");
        assert_eq!(german.name(), "German");
        assert!(!german.is_canonical());
    }

    #[test]
    fn test_from_code_valid() {
        let language = Language::from_code("ja").expect("Should succeed");
        assert_eq!(language.name(), "Japanese");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_targets_start_with_german_and_skip_english() {
        let targets = Language::targets();
        assert_eq!(targets.first(), Some(&Language::GERMAN));
        assert!(!targets.contains(&Language::ENGLISH));
        assert_eq!(targets.len(), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::GERMAN.to_string(), "German (de)");
    }
}
