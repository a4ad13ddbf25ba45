use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,
    pub openai_temperature: f32,

    // Dictionaries
    pub translations_dir: PathBuf,

    // Version history
    pub repo_root: PathBuf,
    pub history_window: usize,

    // Targets (empty = every registered target locale)
    pub locales: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let history_window = std::env::var("HISTORY_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        if history_window == 0 {
            bail!("HISTORY_WINDOW must be at least 1");
        }

        let locales: Vec<String> = std::env::var("TRANSLATION_LOCALES")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            openai_temperature: std::env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.2),

            // Dictionaries
            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("ui/src/translations")),

            // Version history
            repo_root: std::env::var("REPO_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            history_window,

            locales,
        })
    }

    /// Resolve the configured target locales.
    ///
    /// Returns every registered target when `TRANSLATION_LOCALES` is unset.
    /// Unknown codes and the source locale itself are rejected.
    pub fn target_languages(&self) -> Result<Vec<Language>> {
        if self.locales.is_empty() {
            return Ok(Language::targets());
        }

        self.locales
            .iter()
            .map(|code| {
                let language = Language::from_code(code)
                    .with_context(|| format!("Invalid TRANSLATION_LOCALES entry '{}'", code))?;
                if language.is_canonical() {
                    bail!("'{}' is the source locale and cannot be a target", code);
                }
                Ok(language)
            })
            .collect()
    }

    /// Path of the source dictionary relative to the repository root,
    /// as version history addresses it.
    ///
    /// Both directories are canonicalized first, so relative and absolute
    /// spellings of the same location agree. Fails when either directory
    /// does not exist or the translations live outside the repository.
    pub fn source_history_path(&self) -> Result<String> {
        let root = self
            .repo_root
            .canonicalize()
            .with_context(|| format!("REPO_ROOT {} is not accessible", self.repo_root.display()))?;
        let dir = self.translations_dir.canonicalize().with_context(|| {
            format!(
                "TRANSLATIONS_DIR {} is not accessible",
                self.translations_dir.display()
            )
        })?;

        let file = dir.join(format!("{}.json", Language::canonical().code()));
        let relative = file.strip_prefix(&root).with_context(|| {
            format!(
                "TRANSLATIONS_DIR {} is outside REPO_ROOT {}",
                dir.display(),
                root.display()
            )
        })?;
        Ok(relative.to_string_lossy().replace('\\', "/"))
    }
}
