//! Per-run outcome reporting.
//!
//! Collects what happened to each locale so the binary can log a summary and
//! choose its exit status.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of one locale that was synchronized and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleReport {
    /// Locale code (e.g. "de")
    pub code: String,

    /// Number of source entries added or changed since the snapshot
    pub changed: usize,

    /// Number of entries the backend translated
    pub translated: usize,

    /// Number of entries kept in English because the backend failed
    pub failed: usize,

    /// File that was written
    pub path: PathBuf,
}

/// A locale whose pipeline stopped before writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleFailure {
    pub code: String,
    pub error: String,
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub succeeded: Vec<LocaleReport>,
    pub failed: Vec<LocaleFailure>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, report: LocaleReport) {
        self.succeeded.push(report);
    }

    pub fn record_failure(&mut self, code: &str, error: &anyhow::Error) {
        self.failed.push(LocaleFailure {
            code: code.to_string(),
            error: format!("{:#}", error),
        });
    }

    /// True when every locale was written
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Entries translated across all written locales
    pub fn total_translated(&self) -> usize {
        self.succeeded.iter().map(|r| r.translated).sum()
    }

    /// Entries left untranslated across all written locales
    pub fn total_untranslated(&self) -> usize {
        self.succeeded.iter().map(|r| r.failed).sum()
    }

    /// Share of locales written, as a percentage (0-100)
    pub fn success_rate(&self) -> f64 {
        let total = self.succeeded.len() + self.failed.len();
        if total > 0 {
            (self.succeeded.len() as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Log a one-line summary plus one line per failed locale
    pub fn log_summary(&self) {
        info!(
            "Run finished: {}/{} locales written ({:.1}%), {} entries translated, {} kept in English",
            self.succeeded.len(),
            self.succeeded.len() + self.failed.len(),
            self.success_rate(),
            self.total_translated(),
            self.total_untranslated()
        );
        for failure in &self.failed {
            warn!("Locale {} not updated: {}", failure.code, failure.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str, translated: usize, failed: usize) -> LocaleReport {
        LocaleReport {
            code: code.to_string(),
            changed: translated + failed,
            translated,
            failed,
            path: PathBuf::from(format!("{}.json", code)),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::new();
        assert!(report.is_success());
        assert_eq!(report.success_rate(), 0.0);
        assert_eq!(report.total_translated(), 0);
    }

    #[test]
    fn test_totals() {
        let mut report = RunReport::new();
        report.record_success(locale("de", 3, 1));
        report.record_success(locale("fr", 2, 0));

        assert!(report.is_success());
        assert_eq!(report.total_translated(), 5);
        assert_eq!(report.total_untranslated(), 1);
        assert_eq!(report.success_rate(), 100.0);
    }

    #[test]
    fn test_failure_keeps_error_chain() {
        let mut report = RunReport::new();
        report.record_success(locale("de", 1, 0));
        let error = anyhow::anyhow!("missing root key").context("LoadTarget failed");
        report.record_failure("fr", &error);

        assert!(!report.is_success());
        assert_eq!(report.success_rate(), 50.0);
        assert_eq!(report.failed[0].code, "fr");
        assert_eq!(report.failed[0].error, "LoadTarget failed: missing root key");
    }

    #[test]
    fn test_report_serializes() {
        let mut report = RunReport::new();
        report.record_success(locale("ja", 1, 0));

        let json = serde_json::to_string(&report).expect("Should serialize");
        assert!(json.contains("\"succeeded\""));
        assert!(json.contains("\"code\":\"ja\""));
    }
}
