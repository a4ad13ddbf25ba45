use crate::dictionary::codec::{flatten, unflatten, FlatMapping};
use crate::dictionary::node::NestedDict;
use crate::error::DictionaryError;

/// Overlay translated values onto existing ones.
///
/// Translated values win. Existing paths keep their position; paths only present
/// in `translated` are appended in the order given.
pub fn merge(existing: &FlatMapping, translated: &FlatMapping) -> FlatMapping {
    let mut merged = existing.clone();
    merged.extend(
        translated
            .iter()
            .map(|(path, value)| (path.clone(), value.clone())),
    );
    merged
}

/// Merge translated paths into a locale dictionary and rebuild its nesting.
pub fn merge_into_dictionary(
    existing: &NestedDict,
    translated: &FlatMapping,
) -> Result<NestedDict, DictionaryError> {
    unflatten(&merge(&flatten(existing), translated))
}
