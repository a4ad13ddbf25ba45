use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A dictionary level: keys in document order mapped to leaves or sub-dictionaries.
///
/// Equality ignores key order; iteration and serialization follow insertion order.
pub type NestedDict = IndexMap<String, Node>;

/// One value in a nested dictionary.
///
/// A JSON string deserializes to `Leaf`, a JSON object to `Container`.
/// Anything else (numbers, arrays, null) is rejected by the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(String),
    Container(NestedDict),
}

impl Node {
    /// Build a container node from `(key, node)` pairs
    pub fn container<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Container(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn leaf(value: impl Into<String>) -> Self {
        Node::Leaf(value.into())
    }

    pub fn as_container(&self) -> Option<&NestedDict> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_preserves_order() {
        let dict: NestedDict =
            serde_json::from_str(r#"{"zeta": "Z", "alpha": {"b": "B", "a": "A"}}"#)
                .expect("Should parse");

        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);

        let inner = dict["alpha"].as_container().expect("alpha is a container");
        let inner_keys: Vec<_> = inner.keys().cloned().collect();
        assert_eq!(inner_keys, vec!["b", "a"]);
    }

    #[test]
    fn test_deserialize_rejects_numbers() {
        let result: Result<NestedDict, _> = serde_json::from_str(r#"{"count": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_arrays() {
        let result: Result<NestedDict, _> = serde_json::from_str(r#"{"items": ["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let dict: NestedDict = [(
            "en".to_string(),
            Node::container([("greeting", Node::leaf("Hello"))]),
        )]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&dict).expect("Should serialize");
        assert_eq!(json, r#"{"en":{"greeting":"Hello"}}"#);
    }
}
