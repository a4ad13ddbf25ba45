//! Locale registry and translation checks.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the source locale and all target locales
//! - `language`: Type-safe Language handle validated against the registry
//! - `validator`: Translation quality validation
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! let source = Language::canonical();
//! for target in Language::targets() {
//!     println!("{} -> {}", source.code(), target.code());
//! }
//! ```

mod language;
mod registry;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{TranslationValidator, ValidationReport};
