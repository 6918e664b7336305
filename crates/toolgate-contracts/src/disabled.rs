//! The shared set of tool names excluded from registration.
//!
//! A `ToolsetGroup` builds one `DisabledTools` at construction and hands a
//! clone of it to every toolset it owns. Clones share the same allocation,
//! so every toolset observes the group's single logical set. The set is
//! never mutated after construction and is not behind a lock.

use std::collections::HashSet;
use std::sync::Arc;

/// Names of tools that must never be exposed, regardless of toolset state.
#[derive(Debug, Clone, Default)]
pub struct DisabledTools {
    names: Arc<HashSet<String>>,
}

impl DisabledTools {
    /// Collect `names` into a new shared set. Duplicates collapse.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Arc::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Return true if `name` is disabled.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the disabled names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Return true if `self` and `other` are handles to the same set.
    pub fn is_shared_with(&self, other: &DisabledTools) -> bool {
        Arc::ptr_eq(&self.names, &other.names)
    }
}

impl<S: Into<String>> FromIterator<S> for DisabledTools {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
