//! Conversion between nested dictionaries and flat path mappings.
//!
//! A path joins the keys from the root down to a leaf with [`SEPARATOR`],
//! e.g. `en|settings|title`. Keys must not contain the separator; this is a
//! precondition on the data and is not checked.

use crate::dictionary::node::{NestedDict, Node};
use crate::error::DictionaryError;
use indexmap::IndexMap;

/// Reserved path separator
pub const SEPARATOR: char = '|';

/// Leaf values keyed by their full path, in document order.
pub type FlatMapping = IndexMap<String, String>;

/// Flatten a nested dictionary into `path -> leaf` pairs.
///
/// Traversal is depth-first in key order. Empty containers produce no entries.
pub fn flatten(tree: &NestedDict) -> FlatMapping {
    let mut flat = FlatMapping::new();
    flatten_into(tree, None, &mut flat);
    flat
}

fn flatten_into(tree: &NestedDict, prefix: Option<&str>, flat: &mut FlatMapping) {
    for (key, node) in tree {
        let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}{SEPARATOR}{key}"));
        match node {
            Node::Leaf(value) => {
                flat.insert(path, value.clone());
            }
            Node::Container(children) => flatten_into(children, Some(&path), flat),
        }
    }
}

/// Rebuild a nested dictionary from flat paths.
///
/// Intermediate containers are created on first use, so sibling order follows
/// the order in which paths first mention each key.
///
/// # Errors
/// Returns `DictionaryError::PathConflict` when one path needs a prefix to be a
/// container while another path stores a leaf there.
pub fn unflatten(flat: &FlatMapping) -> Result<NestedDict, DictionaryError> {
    let mut root = NestedDict::new();
    for (path, value) in flat {
        insert_path(&mut root, path, value)?;
    }
    Ok(root)
}

fn insert_path(root: &mut NestedDict, path: &str, value: &str) -> Result<(), DictionaryError> {
    let (parents, leaf_key): (Vec<&str>, &str) = match path.rsplit_once(SEPARATOR) {
        Some((parents, leaf_key)) => (parents.split(SEPARATOR).collect(), leaf_key),
        None => (Vec::new(), path),
    };

    let mut level = root;
    for (depth, segment) in parents.iter().enumerate() {
        let child = level
            .entry((*segment).to_string())
            .or_insert_with(|| Node::Container(NestedDict::new()));
        level = match child {
            Node::Container(children) => children,
            Node::Leaf(_) => {
                return Err(DictionaryError::PathConflict {
                    path: parents[..=depth].join(&SEPARATOR.to_string()),
                })
            }
        };
    }

    if let Some(Node::Container(_)) = level.get(leaf_key) {
        return Err(DictionaryError::PathConflict {
            path: path.to_string(),
        });
    }
    level.insert(leaf_key.to_string(), Node::Leaf(value.to_string()));
    Ok(())
}

/// Keep only the paths under `namespace` and drop that leading segment.
///
/// `en|settings|title` with namespace `en` becomes `settings|title`; paths
/// outside the namespace are discarded.
pub fn strip_namespace(flat: &FlatMapping, namespace: &str) -> FlatMapping {
    let prefix = format!("{namespace}{SEPARATOR}");
    flat.iter()
        .filter_map(|(path, value)| {
            path.strip_prefix(&prefix)
                .map(|rest| (rest.to_string(), value.clone()))
        })
        .collect()
}
