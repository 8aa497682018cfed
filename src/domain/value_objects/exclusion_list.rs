//! Exclusion List Value Object
//!
//! Path fragments the flattening engine must leave as external references.

use std::collections::HashSet;

/// Ordered, duplicate-free list of excluded path fragments.
///
/// A bare fragment (`polymer`) matches any path with an equal segment.
/// A fragment containing `/` (`/tf-imports/d3.js`) matches as a substring
/// of the path with a leading slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment. Returns false when it was already present.
    pub fn push(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        if fragment.is_empty() || self.seen.contains(&fragment) {
            return false;
        }
        self.seen.insert(fragment.clone());
        self.entries.push(fragment);
        true
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.seen.contains(fragment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// True when `path` (forward-slash separated) is covered by any fragment.
    pub fn matches(&self, path: &str) -> bool {
        let rooted = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        self.entries.iter().any(|fragment| {
            if fragment.contains('/') {
                rooted.contains(fragment.as_str())
            } else {
                rooted.split('/').any(|segment| segment == fragment)
            }
        })
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for ExclusionList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}
