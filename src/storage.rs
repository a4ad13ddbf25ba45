//! Locale files on disk.
//!
//! Every locale lives in `<dir>/<code>.json` as a single object whose only
//! top-level key is the locale code: `{"de": {...}}`.

use crate::dictionary::{NestedDict, Node};
use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of a locale's dictionary file
pub fn locale_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(format!("{}.json", code))
}

/// Parse a dictionary document from JSON text
pub fn parse_document(text: &str, path: &Path) -> Result<NestedDict, StorageError> {
    serde_json::from_str(text).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole dictionary document, root key included
pub fn load_document(path: &Path) -> Result<NestedDict, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, path)
}

/// Read a locale file and return the dictionary under its root key.
pub fn load_locale(dir: &Path, code: &str) -> Result<NestedDict, StorageError> {
    let path = locale_path(dir, code);
    let mut document = load_document(&path)?;

    match document.shift_remove(code) {
        Some(Node::Container(dict)) => {
            debug!("Loaded {} ({} top-level keys)", path.display(), dict.len());
            Ok(dict)
        }
        Some(Node::Leaf(_)) => Err(StorageError::RootNotContainer {
            path,
            code: code.to_string(),
        }),
        None => Err(StorageError::MissingRoot {
            path,
            code: code.to_string(),
        }),
    }
}

/// Render a locale dictionary wrapped in its root key.
///
/// Two-space indentation, non-ASCII characters written as-is.
pub fn render_locale(code: &str, dict: &NestedDict) -> Result<String, StorageError> {
    let mut document = NestedDict::new();
    document.insert(code.to_string(), Node::Container(dict.clone()));

    serde_json::to_string_pretty(&document).map_err(|source| StorageError::Serialize {
        code: code.to_string(),
        source,
    })
}

/// Write a locale dictionary back to `<dir>/<code>.json`.
pub fn save_locale(dir: &Path, code: &str, dict: &NestedDict) -> Result<PathBuf, StorageError> {
    let path = locale_path(dir, code);
    let rendered = render_locale(code, dict)?;

    fs::write(&path, rendered).map_err(|source| StorageError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).expect("Failed to write fixture");
    }

    #[test]
    fn test_locale_path() {
        assert_eq!(
            locale_path(Path::new("ui/src/translations"), "zh_CN"),
            PathBuf::from("ui/src/translations/zh_CN.json")
        );
    }

    #[test]
    fn test_load_locale_returns_inner_dictionary() {
        let dir = TempDir::new().unwrap();
        write(&dir, "de.json", r#"{"de": {"greeting": "Hallo"}}"#);

        let dict = load_locale(dir.path(), "de").expect("Should load");
        assert_eq!(dict.get("greeting"), Some(&Node::leaf("Hallo")));
    }

    #[test]
    fn test_load_locale_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_locale(dir.path(), "fr").unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_load_locale_missing_root() {
        let dir = TempDir::new().unwrap();
        write(&dir, "de.json", r#"{"en": {"greeting": "Hello"}}"#);

        let err = load_locale(dir.path(), "de").unwrap_err();
        assert!(matches!(err, StorageError::MissingRoot { .. }));
    }

    #[test]
    fn test_load_locale_root_is_leaf() {
        let dir = TempDir::new().unwrap();
        write(&dir, "de.json", r#"{"de": "oops"}"#);

        let err = load_locale(dir.path(), "de").unwrap_err();
        assert!(matches!(err, StorageError::RootNotContainer { .. }));
    }

    #[test]
    fn test_load_locale_invalid_json() {
        let dir = TempDir::new().unwrap();
        write(&dir, "de.json", "{not json");

        let err = load_locale(dir.path(), "de").unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[test]
    fn test_render_locale_format() {
        let mut dict = NestedDict::new();
        dict.insert("farewell".to_string(), Node::leaf("Tschüss"));
        dict.insert(
            "settings".to_string(),
            Node::container([("title", Node::leaf("Einstellungen"))]),
        );

        let rendered = render_locale("de", &dict).unwrap();
        let expected = "{\n  \"de\": {\n    \"farewell\": \"Tschüss\",\n    \"settings\": {\n      \"title\": \"Einstellungen\"\n    }\n  }\n}";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = TempDir::new().unwrap();
        let dict: NestedDict =
            serde_json::from_str(r#"{"zeta": "Z", "alpha": "A", "mid": {"y": "Y", "b": "B"}}"#)
                .unwrap();

        save_locale(dir.path(), "ja", &dict).expect("Should save");
        let loaded = load_locale(dir.path(), "ja").expect("Should load");

        let keys: Vec<_> = loaded.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(loaded, dict);
    }
}
