//! Directory-backed ComponentSource
//!
//! Every immediate subdirectory of the components root is one component.

use std::path::{Path, PathBuf};

use crate::domain::ports::ComponentSource;
use crate::error::{VulcanizeError, VulcanizeResult};

#[derive(Debug, Clone)]
pub struct DirectoryComponentSource {
    root: PathBuf,
}

impl DirectoryComponentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> VulcanizeResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(VulcanizeError::ComponentsDirNotFound {
                path: self.root.clone(),
            });
        }

        let unreadable = |source: std::io::Error| VulcanizeError::ComponentsDirUnreadable {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            if !entry.file_type().map_err(unreadable)?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // hidden directories (.git, .cache) are not components
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

impl ComponentSource for DirectoryComponentSource {
    fn list_components(&self, filter: &dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>> {
        let names = self.scan()?;
        tracing::trace!(root = %self.root.display(), count = names.len(), "scanned components");
        Ok(names.into_iter().filter(|n| filter(n.as_str())).collect())
    }
}
