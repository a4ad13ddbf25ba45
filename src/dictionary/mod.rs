//! Nested dictionary model and the pure diff/merge algorithms over it.
//!
//! All functions here are side-effect free; file access and version history
//! live in `storage` and `history`.
//!
//! # Architecture
//!
//! - `node`: `Node` (leaf or container) and the insertion-ordered `NestedDict`
//! - `codec`: flatten/unflatten between nested and `|`-delimited flat form
//! - `diff`: change detection against a prior snapshot
//! - `merge`: overlay freshly translated values onto a locale's existing ones
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_sync::dictionary::{detect_changes, flatten, merge_into_dictionary};
//!
//! let changes = detect_changes(&flatten(&current), &flatten(&previous));
//! let merged = merge_into_dictionary(&target, &translated)?;
//! ```

mod codec;
mod diff;
mod merge;
mod node;

pub use codec::{flatten, strip_namespace, unflatten, FlatMapping, SEPARATOR};
pub use diff::{detect_changes, select_changed, ChangeSet};
pub use merge::{merge, merge_into_dictionary};
pub use node::{NestedDict, Node};
