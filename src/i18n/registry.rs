//! Locale registry: Single source of truth for the source locale and every
//! target locale kept in sync with it.
//!
//! It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Configuration for a locale dictionary.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Locale code; also the file stem and the dictionary root key (e.g. "de", "zh_CN")
    pub code: &'static str,

    /// Language name handed to the translation backend (e.g. "German")
    pub name: &'static str,

    /// Whether this is the canonical/source locale (only one should be true)
    pub is_canonical: bool,
}

/// Global locale registry singleton.
///
/// The order of entries is the order in which target locales are processed.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get every translation target in processing order.
    pub fn list_targets(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| !lang.is_canonical)
            .collect()
    }

    /// Get the canonical locale configuration.
    ///
    /// # Panics
    /// Panics if no canonical locale is found or if multiple canonical
    /// locales are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn target(code: &'static str, name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        is_canonical: false,
    }
}

/// Default locale configurations: English source plus the UI's target locales.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            is_canonical: true,
        },
        target("de", "German"),
        target("es", "Spanish"),
        target("fr", "French"),
        target("hi", "Hindi"),
        target("it", "Italian"),
        target("ja", "Japanese"),
        target("ko", "Korean"),
        target("pl", "Polish"),
        target("pt", "Portuguese"),
        target("ru", "Russian"),
        target("zh_CN", "Simplified Chinese (Mandarin)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should exist");
        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
    }

    #[test]
    fn test_get_by_code_chinese_uses_underscore_code() {
        let config = LanguageRegistry::get()
            .get_by_code("zh_CN")
            .expect("Chinese should exist");
        assert_eq!(config.name, "Simplified Chinese (Mandarin)");
        assert!(!config.is_canonical);
        assert!(LanguageRegistry::get().get_by_code("zh-CN").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
    }

    #[test]
    fn test_list_targets_excludes_source_and_keeps_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_targets()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(
            codes,
            vec!["de", "es", "fr", "hi", "it", "ja", "ko", "pl", "pt", "ru", "zh_CN"]
        );
    }

    #[test]
    fn test_registry_includes_source() {
        let all = &LanguageRegistry::get().languages;
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].code, "en");
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_codes_are_unique() {
        let all = &LanguageRegistry::get().languages;
        let mut codes: Vec<_> = all.iter().map(|lang| lang.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
