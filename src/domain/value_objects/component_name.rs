//! Component Name Value Object
//!
//! Components live on disk under either spelling (`tf_foo` or `tf-foo`).
//! The underscore form is canonical.

use std::fmt;

use crate::error::{VulcanizeError, VulcanizeResult};

/// Underscore-form component identifier, e.g. `tf_tensorboard`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    /// Normalize a directory name into its canonical underscore form.
    pub fn parse(dir_name: &str) -> VulcanizeResult<Self> {
        let trimmed = dir_name.trim();
        if trimmed.is_empty() {
            return Err(invalid(dir_name, "name is empty"));
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(invalid(dir_name, "name contains a path separator"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(invalid(dir_name, "name is a relative path component"));
        }

        Ok(Self(trimmed.replace('-', "_")))
    }

    /// Canonical underscore form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dash form: every `_` replaced with `-`
    pub fn dash_form(&self) -> String {
        self.0.replace('_', "-")
    }

    /// True when the name starts with any of the given prefixes.
    pub fn is_first_party<S: AsRef<str>>(&self, prefixes: &[S]) -> bool {
        prefixes.iter().any(|p| self.0.starts_with(p.as_ref()))
    }
}

fn invalid(name: &str, reason: &str) -> VulcanizeError {
    VulcanizeError::InvalidComponentName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
