//! Exclusion builder
//!
//! Third-party components are never inlined. A handful of third-party
//! scripts live inside first-party shells (`tf-imports`) and have to be
//! listed by hand: their HTML wrappers still get traversed, only the
//! scripts stay external.

use crate::domain::value_objects::ExclusionList;

/// Third-party scripts kept external even though their shells are inlined.
/// Update when a new vendored script is added under `tf-imports`.
pub const THIRD_PARTY_SCRIPTS: [&str; 5] = [
    "/tf-imports/d3.js",
    "/tf-imports/dagre.js",
    "/tf-imports/graphlib.js",
    "/tf-imports/lodash.js",
    "/tf-imports/plottable.js",
];

/// Third-party component names followed by the manual script list.
pub fn build_exclusions<A, B>(third_party: &[A], manual: &[B]) -> ExclusionList
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut list = ExclusionList::new();
    list.extend(third_party.iter().map(|n| n.as_ref().to_string()));
    list.extend(manual.iter().map(|p| p.as_ref().to_string()));
    list
}
