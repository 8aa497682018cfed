//! Redirect builder
//!
//! Imports reference first-party components by their dash-form directory
//! (`tf-dashboard-common`) while the tree stores them in underscore form.

use std::path::Path;

use crate::domain::value_objects::{ComponentName, PathRedirect};
use crate::error::{VulcanizeError, VulcanizeResult};

/// Bring a configured components root into the form resolved references
/// take: `/`-separated, no empty or `.` segments.
///
/// Absolute roots and roots containing `..` are rejected.
pub fn normalize_components_root(root: &str) -> VulcanizeResult<String> {
    let invalid = |reason: &str| VulcanizeError::InvalidComponentsRoot {
        value: root.to_string(),
        reason: reason.to_string(),
    };

    let unified = root.replace('\\', "/");
    if unified.starts_with('/') || Path::new(root).is_absolute() {
        return Err(invalid("must be relative to the project root"));
    }

    let mut segments = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Err(invalid("must not contain '..'")),
            other => segments.push(other),
        }
    }
    Ok(segments.join("/"))
}

/// Join a components root and a directory name with a single `/`.
pub fn component_path(components_root: &str, dir: &str) -> String {
    let root = components_root.trim_end_matches('/');
    if root.is_empty() {
        dir.to_string()
    } else {
        format!("{}/{}", root, dir)
    }
}

/// One `root/<dash-form>|root/<underscore-form>` redirect per component.
pub fn build_redirects(components_root: &str, components: &[ComponentName]) -> Vec<PathRedirect> {
    components
        .iter()
        .map(|name| {
            PathRedirect::new(
                component_path(components_root, &name.dash_form()),
                component_path(components_root, name.as_str()),
            )
        })
        .collect()
}
