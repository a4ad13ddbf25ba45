use crate::dictionary::codec::FlatMapping;
use std::collections::BTreeSet;

/// Paths that are new or whose value changed since the snapshot.
///
/// A sorted set, so two runs over the same inputs always agree.
pub type ChangeSet = BTreeSet<String>;

/// Compare the current flat dictionary against a prior snapshot.
///
/// A path is reported when it is missing from `previous` or maps to a different
/// value there. Paths that exist only in `previous` are not reported: deletions
/// leave target locales untouched.
pub fn detect_changes(current: &FlatMapping, previous: &FlatMapping) -> ChangeSet {
    current
        .iter()
        .filter(|(path, value)| previous.get(*path) != Some(*value))
        .map(|(path, _)| path.clone())
        .collect()
}

/// Entries of `flat` whose path is in `changes`, in `flat`'s own order.
pub fn select_changed(flat: &FlatMapping, changes: &ChangeSet) -> FlatMapping {
    flat.iter()
        .filter(|(path, _)| changes.contains(*path))
        .map(|(path, value)| (path.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pairs: &[(&str, &str)]) -> FlatMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn set(paths: &[&str]) -> ChangeSet {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_detect_added_and_changed() {
        let previous = flat(&[("a", "1"), ("b", "2")]);
        let current = flat(&[("a", "1"), ("b", "3"), ("c", "4")]);
        assert_eq!(detect_changes(&current, &previous), set(&["b", "c"]));
    }

    #[test]
    fn test_detect_ignores_deletions() {
        let previous = flat(&[("a", "1"), ("gone", "x")]);
        let current = flat(&[("a", "1")]);
        assert!(detect_changes(&current, &previous).is_empty());
    }

    #[test]
    fn test_detect_everything_new_against_empty_snapshot() {
        let current = flat(&[("en|a", "A"), ("en|b|c", "C")]);
        assert_eq!(
            detect_changes(&current, &FlatMapping::new()),
            set(&["en|a", "en|b|c"])
        );
    }

    #[test]
    fn test_detect_is_order_independent() {
        let previous_one = flat(&[("a", "1"), ("b", "2")]);
        let previous_two = flat(&[("b", "2"), ("a", "1")]);
        let current_one = flat(&[("c", "4"), ("b", "3"), ("a", "1")]);
        let current_two = flat(&[("a", "1"), ("b", "3"), ("c", "4")]);

        let expected = detect_changes(&current_one, &previous_one);
        assert_eq!(detect_changes(&current_two, &previous_two), expected);
        assert_eq!(detect_changes(&current_one, &previous_two), expected);
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        let previous = flat(&[("a", "hello")]);
        let current = flat(&[("a", "Hello")]);
        assert_eq!(detect_changes(&current, &previous), set(&["a"]));
    }

    #[test]
    fn test_select_changed_keeps_document_order() {
        let current = flat(&[("z", "Z"), ("m", "M"), ("a", "A")]);
        let selected = select_changed(&current, &set(&["a", "z"]));
        let keys: Vec<_> = selected.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
