//! Component inventory resolution
//!
//! Splits the component directories into first-party components (prefixed
//! `tf_` / `vz_` once normalized) and third-party ones.

use std::collections::BTreeMap;

use crate::domain::ports::ComponentSource;
use crate::domain::value_objects::ComponentName;
use crate::error::{VulcanizeError, VulcanizeResult};

/// Default first-party prefixes
pub const FIRST_PARTY_PREFIXES: [&str; 2] = ["tf_", "vz_"];

/// Resolved component inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentInventory {
    /// First-party components, canonical names, in source order
    pub first_party: Vec<ComponentName>,
    /// Third-party directory names exactly as found on disk
    pub third_party: Vec<String>,
}

impl ComponentInventory {
    /// Query `source` for both halves of the inventory.
    ///
    /// Two first-party directories that normalize to the same name
    /// (`tf_foo` and `tf-foo`) are rejected with `ComponentCollision`.
    pub fn resolve<C, S>(source: &C, prefixes: &[S]) -> VulcanizeResult<Self>
    where
        C: ComponentSource + ?Sized,
        S: AsRef<str>,
    {
        let is_first_party = |dir: &str| {
            ComponentName::parse(dir)
                .map(|name| name.is_first_party(prefixes))
                .unwrap_or(false)
        };

        let first_dirs = source.list_components(&is_first_party)?;
        let third_party = source.list_components(&|dir: &str| !is_first_party(dir))?;

        let mut seen: BTreeMap<ComponentName, String> = BTreeMap::new();
        let mut first_party = Vec::with_capacity(first_dirs.len());
        for dir in first_dirs {
            let name = ComponentName::parse(&dir)?;
            if let Some(previous) = seen.get(&name) {
                return Err(VulcanizeError::ComponentCollision {
                    first: previous.clone(),
                    second: dir,
                    normalized: name.to_string(),
                });
            }
            seen.insert(name.clone(), dir);
            first_party.push(name);
        }

        tracing::debug!(
            first_party = first_party.len(),
            third_party = third_party.len(),
            "resolved component inventory"
        );

        Ok(Self {
            first_party,
            third_party,
        })
    }
}
