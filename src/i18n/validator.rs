//! Translation quality validation module.
//!
//! Checks that a translated UI string kept the parts that must never be
//! translated: `{placeholders}` consumed by the UI's interpolation and
//! ALL-CAPS state tokens such as `FAILED` or `RUNNING`.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static STATE_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate that a translation preserves the untranslatable parts of the original.
    ///
    /// - A changed set of `{placeholders}` is an error: the UI would fail to interpolate.
    /// - An ALL-CAPS state token missing from the translation is a warning.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let orig_placeholders = Self::extract_placeholders(original);
        let trans_placeholders = Self::extract_placeholders(translated);
        if orig_placeholders != trans_placeholders {
            report.errors.push(format!(
                "Placeholder mismatch: original has {:?}, translation has {:?}",
                orig_placeholders, trans_placeholders
            ));
        }

        let trans_states = Self::extract_state_tokens(translated);
        let missing: Vec<String> = Self::extract_state_tokens(original)
            .into_iter()
            .filter(|token| !trans_states.contains(token))
            .collect();
        if !missing.is_empty() {
            report
                .warnings
                .push(format!("State tokens not preserved: {:?}", missing));
        }

        report
    }

    /// Extract `{name}` placeholders, sorted so word order changes don't matter
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{[^{}\s]+\}").expect("placeholder regex is valid"));

        let mut placeholders: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        placeholders.sort();
        placeholders
    }

    /// Extract ALL-CAPS tokens of at least three characters (e.g. SUCCESS, KILLING)
    fn extract_state_tokens(text: &str) -> Vec<String> {
        let regex = STATE_TOKEN_REGEX
            .get_or_init(|| Regex::new(r"\b[A-Z][A-Z_]{2,}\b").expect("state regex is valid"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
