//! Path Redirect Value Object
//!
//! A redirect tells the flattening engine that references under `from`
//! resolve under `to`. Serialized as `from|to`.

use std::fmt;
use std::str::FromStr;

use crate::error::VulcanizeError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRedirect {
    from: String,
    to: String,
}

impl PathRedirect {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: trim_trailing_slash(from.into()),
            to: trim_trailing_slash(to.into()),
        }
    }

    pub fn from_path(&self) -> &str {
        &self.from
    }

    pub fn to_path(&self) -> &str {
        &self.to
    }

    /// Rewrite `path` when it equals `from` or lies underneath it.
    ///
    /// Matching is per path segment: `components/tf-foo` does not
    /// capture `components/tf-foobar`.
    pub fn apply(&self, path: &str) -> Option<String> {
        if path == self.from {
            return Some(self.to.clone());
        }
        let rest = path.strip_prefix(&self.from)?;
        if rest.starts_with('/') {
            Some(format!("{}{}", self.to, rest))
        } else {
            None
        }
    }
}

fn trim_trailing_slash(mut s: String) -> String {
    while s.len() > 1 && s.ends_with('/') {
        s.pop();
    }
    s
}

impl fmt::Display for PathRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.from, self.to)
    }
}

impl FromStr for PathRedirect {
    type Err = VulcanizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('|') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() && !to.contains('|') => {
                Ok(Self::new(from, to))
            }
            _ => Err(VulcanizeError::InvalidRedirect {
                value: s.to_string(),
            }),
        }
    }
}
