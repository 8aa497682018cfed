//! ComponentSource port - component inventory lookup
//!
//! The bundle task never scans directories itself; it asks a source for
//! the component directory names that pass a filter.

use crate::error::VulcanizeResult;

/// Supplies component directory names.
///
/// Implemented by `DirectoryComponentSource` and by any closure of shape
/// `Fn(&dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>>`.
pub trait ComponentSource {
    /// Directory names accepted by `filter`, in a stable order.
    fn list_components(&self, filter: &dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>>;

    /// Every directory name.
    fn list_all(&self) -> VulcanizeResult<Vec<String>> {
        self.list_components(&|_| true)
    }
}

impl<F> ComponentSource for F
where
    F: Fn(&dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>>,
{
    fn list_components(&self, filter: &dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>> {
        self(filter)
    }
}

/// Fixed in-memory inventory
#[derive(Debug, Clone, Default)]
pub struct StaticComponents(pub Vec<String>);

impl StaticComponents {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl ComponentSource for StaticComponents {
    fn list_components(&self, filter: &dyn Fn(&str) -> bool) -> VulcanizeResult<Vec<String>> {
        Ok(self.0.iter().filter(|n| filter(n.as_str())).cloned().collect())
    }
}
