//! Incremental synchronization of localized UI-string dictionaries.
//!
//! The English dictionary is the source of truth. Each run compares it with a
//! prior snapshot from version history, translates only the entries that were
//! added or changed, and merges those translations into every target locale
//! without touching anything else.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod history;
pub mod i18n;
pub mod report;
pub mod storage;
pub mod sync;
pub mod translation;
