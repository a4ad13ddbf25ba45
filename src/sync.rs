//! Per-locale synchronization pipeline.
//!
//! Each locale goes through the same linear sequence of stages:
//!
//! ```text
//! LoadCurrent -> LoadSnapshot -> Diff -> FilterNamespace -> Translate
//!     -> LoadTarget -> Merge -> Persist -> Done
//! ```
//!
//! The stages up to `FilterNamespace` only read the source dictionary and its
//! history, so `run` computes them once and every locale shares the result.
//! Locales run one after another. A failing locale is reported and skipped;
//! its file is left untouched and the next locale is unaffected.

use crate::config::Config;
use crate::dictionary::{
    detect_changes, flatten, merge_into_dictionary, select_changed, strip_namespace, FlatMapping,
};
use crate::history::{prior_snapshot, HistorySource};
use crate::i18n::Language;
use crate::report::{LocaleReport, RunReport};
use crate::storage;
use crate::translation::{TranslationGateway, Translator};
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Pipeline stage, used in logs and error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    LoadCurrent,
    LoadSnapshot,
    Diff,
    FilterNamespace,
    Translate,
    LoadTarget,
    Merge,
    Persist,
    Done,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncStage::LoadCurrent => "LoadCurrent",
            SyncStage::LoadSnapshot => "LoadSnapshot",
            SyncStage::Diff => "Diff",
            SyncStage::FilterNamespace => "FilterNamespace",
            SyncStage::Translate => "Translate",
            SyncStage::LoadTarget => "LoadTarget",
            SyncStage::Merge => "Merge",
            SyncStage::Persist => "Persist",
            SyncStage::Done => "Done",
        };
        f.write_str(name)
    }
}

/// Drives the diff-translate-merge pipeline for each target locale.
pub struct Synchronizer<H, T> {
    history: H,
    gateway: TranslationGateway<T>,
    translations_dir: PathBuf,
    history_path: String,
    history_window: usize,
}

impl<H: HistorySource, T: Translator> Synchronizer<H, T> {
    /// # Errors
    /// Fails when the source dictionary cannot be addressed in version history.
    pub fn new(config: &Config, history: H, translator: T) -> Result<Self> {
        Ok(Self {
            history,
            gateway: TranslationGateway::new(translator),
            translations_dir: config.translations_dir.clone(),
            history_path: config.source_history_path()?,
            history_window: config.history_window,
        })
    }

    /// Synchronize every locale in order; failures are collected, not propagated.
    ///
    /// The source-side stages run once and their result is shared by all
    /// locales. If they fail, every locale is reported with that error.
    pub async fn run(&self, targets: &[Language]) -> RunReport {
        let mut report = RunReport::new();

        let to_translate = match self.pending_changes() {
            Ok(to_translate) => to_translate,
            Err(e) => {
                error!("Failed to compute source changes: {:#}", e);
                for target in targets {
                    report.record_failure(target.code(), &e);
                }
                return report;
            }
        };

        for &target in targets {
            match self.apply_changes(target, &to_translate).await {
                Ok(locale_report) => report.record_success(locale_report),
                Err(e) => {
                    error!("Failed to synchronize {}: {:#}", target, e);
                    report.record_failure(target.code(), &e);
                }
            }
        }

        report
    }

    /// Run the full pipeline for one target locale.
    ///
    /// Nothing is written unless every stage before `Persist` succeeded.
    pub async fn sync_locale(&self, target: Language) -> Result<LocaleReport> {
        let to_translate = self.pending_changes()?;
        self.apply_changes(target, &to_translate).await
    }

    /// Source entries changed since the prior snapshot, without the source namespace.
    fn pending_changes(&self) -> Result<FlatMapping> {
        let source = Language::canonical();

        enter(source, SyncStage::LoadCurrent);
        let source_file = storage::locale_path(&self.translations_dir, source.code());
        let current = storage::load_document(&source_file)
            .with_context(|| failed(SyncStage::LoadCurrent))?;

        enter(source, SyncStage::LoadSnapshot);
        let previous = prior_snapshot(&self.history, &self.history_path, self.history_window)
            .with_context(|| failed(SyncStage::LoadSnapshot))?;

        enter(source, SyncStage::Diff);
        let current_flat = flatten(&current);
        let changes = detect_changes(&current_flat, &flatten(&previous));

        enter(source, SyncStage::FilterNamespace);
        let to_translate = strip_namespace(&select_changed(&current_flat, &changes), source.code());
        info!(
            "{} changed entries in {}, {} to translate",
            changes.len(),
            source.code(),
            to_translate.len()
        );
        Ok(to_translate)
    }

    /// Translate the pending entries into `target` and merge them into its file.
    async fn apply_changes(
        &self,
        target: Language,
        to_translate: &FlatMapping,
    ) -> Result<LocaleReport> {
        info!("Synchronizing {} from {}", target, Language::canonical());

        enter(target, SyncStage::Translate);
        let translated_before = self.gateway.translated_count();
        let failed_before = self.gateway.failed_count();
        let translated = self.translate_all(to_translate, target).await;

        enter(target, SyncStage::LoadTarget);
        let existing = storage::load_locale(&self.translations_dir, target.code())
            .with_context(|| failed(SyncStage::LoadTarget))?;

        enter(target, SyncStage::Merge);
        let merged = merge_into_dictionary(&existing, &translated)
            .with_context(|| failed(SyncStage::Merge))?;

        enter(target, SyncStage::Persist);
        let path = storage::save_locale(&self.translations_dir, target.code(), &merged)
            .with_context(|| failed(SyncStage::Persist))?;

        enter(target, SyncStage::Done);
        let report = LocaleReport {
            code: target.code().to_string(),
            changed: to_translate.len(),
            translated: self.gateway.translated_count() - translated_before,
            failed: self.gateway.failed_count() - failed_before,
            path,
        };
        info!(
            "Updated {}: {} translated, {} kept in English",
            report.path.display(),
            report.translated,
            report.failed
        );
        Ok(report)
    }

    /// Translate each entry with its own backend call, one at a time.
    async fn translate_all(&self, to_translate: &FlatMapping, target: Language) -> FlatMapping {
        let mut translated = FlatMapping::with_capacity(to_translate.len());
        for (path, text) in to_translate {
            let value = self.gateway.translate(text, target).await;
            info!("Translated '{}' into {}: {:?} => {:?}", path, target.code(), text, value);
            translated.insert(path.clone(), value);
        }
        translated
    }
}

fn enter(target: Language, stage: SyncStage) {
    debug!("[{}] {}", target.code(), stage);
}

fn failed(stage: SyncStage) -> String {
    format!("{} stage failed", stage)
}
