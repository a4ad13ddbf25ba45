use crate::config::Config;
use crate::i18n::{Language, TranslationValidator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Technical terms that stay in English in every locale (case and plural may adapt)
pub const PROTECTED_TERMS: &[&str] = &[
    "kv store",
    "tenant",
    "namespace",
    "flow",
    "subflow",
    "task",
    "log",
    "blueprint",
    "id",
    "trigger",
    "label",
    "key",
    "value",
    "input",
    "output",
    "port",
    "worker",
    "backfill",
    "healthcheck",
    "min",
    "max",
];

/// Execution states shown in capitals; never translated
pub const STATE_TOKENS: &[&str] = &["WARNING", "FAILED", "SUCCESS", "PAUSED", "RUNNING"];

/// UI-context renderings used as examples in the prompt: (English, German, wrong German)
const UI_CONTEXT_EXAMPLES: &[(&str, &str, &str)] = &[
    ("State", "Zustand", "Staat"),
    ("Execution", "Ausführung", "Hinrichtung"),
    ("Theme", "Modus", "Thema"),
    ("Concurrency", "Nebenläufigkeit", "Konkurrenz"),
    ("Tenant", "Mandant", "Mieter"),
    ("Expand", "Ausklappen", "Erweitern"),
    ("Tab", "Registerkarte", "Reiter"),
    ("Creation", "Erstellung", "Schöpfung"),
];

/// A text-translation backend.
///
/// Implementations make exactly one attempt per call and report failures as
/// errors; [`TranslationGateway`] decides what a failure means for the run.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one UI string into `target_language` (an English language name)
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;

    /// Name used in log lines
    fn provider_name(&self) -> &str;
}

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Build the system prompt for translation
fn build_translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are a software engineer translating textual UI elements of a software \
         application from English into {} while keeping technical terms in English.",
        target_language
    )
}

/// Build the user prompt for translation
fn build_translation_user_prompt(text: &str, target_language: &str) -> String {
    let examples = UI_CONTEXT_EXAMPLES
        .iter()
        .map(|(en, good, bad)| format!("- \"{}\" -> \"{}\" (not \"{}\")", en, good, bad))
        .collect::<Vec<_>>()
        .join("\n");
    let terms = PROTECTED_TERMS
        .iter()
        .map(|term| format!("- \"{}\"", term))
        .collect::<Vec<_>>()
        .join("\n");
    let states = STATE_TOKENS.join(", ");

    format!(
        r#"Translate the text after "----------" to {lang}.

## Context
The text is a label, message or tooltip displayed in a software UI. Pick the meaning
a software user expects. For example, from English to German:
{examples}

## Keep in English
Keep these technical terms in English, adjusting only case or plural form:
{terms}

For example, "Task logs" becomes "Task Logs" in German, never "Aufgabenprotokolle".

Keep execution states written in capitals exactly as they are: {states}.

## Placeholders
Never translate or alter variables in curly braces such as {{label}} or {{key}}.
"System {{label}}" must stay "System {{label}}", never "System {{Etikett}}".

Reply with the translation only.

----------

{text}"#,
        lang = target_language,
        examples = examples,
        terms = terms,
        states = states,
        text = text
    )
}

/// Translation backend calling the OpenAI chat completions API.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiTranslator {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
        }
    }

    fn build_request(&self, text: &str, target_language: &str) -> TranslationRequest {
        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(target_language),
                },
                Message {
                    role: "user".to_string(),
                    content: build_translation_user_prompt(text, target_language),
                },
            ],
            max_completion_tokens: if is_reasoning { 16000 } else { 1000 },
            temperature: if is_reasoning {
                None
            } else {
                Some(self.temperature)
            },
            reasoning_effort: if is_reasoning {
                Some("low".to_string())
            } else {
                None
            },
        }
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let request = self.build_request(text, target_language);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send translation request to OpenAI API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("OpenAI API error during translation ({}): {}", status, body);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI translation response")?;

        let translated = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .context("OpenAI translation response contained no choices")?;

        Ok(translated)
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

/// Fail-open wrapper around a [`Translator`].
///
/// `translate` never returns an error: when the backend fails, the original
/// text is returned and the failure is logged and counted.
pub struct TranslationGateway<T> {
    backend: T,
    translated: AtomicUsize,
    failed: AtomicUsize,
}

impl<T: Translator> TranslationGateway<T> {
    pub fn new(backend: T) -> Self {
        Self {
            backend,
            translated: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    /// Translate one leaf, or echo it back when translation is impossible.
    pub async fn translate(&self, text: &str, target: Language) -> String {
        // Source locale and blank strings need no backend call
        if target.is_canonical() || text.trim().is_empty() {
            return text.to_string();
        }

        match self.backend.translate(text, target.name()).await {
            Ok(translated) => {
                self.translated.fetch_add(1, Ordering::Relaxed);
                debug!(
                    "{} translated into {}: {:?}",
                    self.backend.provider_name(),
                    target.code(),
                    translated
                );

                let validation = TranslationValidator::validate(text, &translated);
                if validation.has_warnings() {
                    warn!(
                        "Translation validation warnings for {} ({:?}): {:?}",
                        target, text, validation.warnings
                    );
                }
                if validation.has_errors() {
                    warn!(
                        "Translation validation errors for {} ({:?}): {:?}",
                        target, text, validation.errors
                    );
                }
                translated
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                warn!(
                    "{} translation to {} failed, keeping original text {:?}: {:#}",
                    self.backend.provider_name(),
                    target,
                    text,
                    e
                );
                text.to_string()
            }
        }
    }

    /// Number of successful backend translations so far
    pub fn translated_count(&self) -> usize {
        self.translated.load(Ordering::Relaxed)
    }

    /// Number of backend failures so far
    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn backend(&self) -> &T {
        &self.backend
    }
}
