//! Property tests for exclusion lists.

use proptest::prelude::*;

use tb_vulcanize::domain::services::{build_exclusions, THIRD_PARTY_SCRIPTS};
use tb_vulcanize::domain::value_objects::ExclusionList;

fn component() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every third-party name and manual entry is present, exactly once.
    #[test]
    fn property_exclusions_cover_inputs_without_duplicates(
        third in proptest::collection::vec(component(), 0..10),
    ) {
        let list = build_exclusions(&third, &THIRD_PARTY_SCRIPTS);

        for name in &third {
            prop_assert!(list.contains(name));
        }
        for script in THIRD_PARTY_SCRIPTS {
            prop_assert!(list.contains(script));
        }

        let mut unique: Vec<&str> = list.iter().collect();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), list.len());
    }

    /// PROPERTY: Insertion order is kept, third-party names first.
    #[test]
    fn property_exclusions_keep_order(
        third in proptest::collection::btree_set(component(), 0..10),
    ) {
        let third: Vec<String> = third.into_iter().collect();
        let list = build_exclusions(&third, &THIRD_PARTY_SCRIPTS);
        prop_assert_eq!(&list.as_slice()[..third.len()], third.as_slice());
    }

    /// PROPERTY: A bare fragment matches any path holding it as a whole segment.
    #[test]
    fn property_bare_fragment_matches_segment(
        name in component(),
        before in proptest::collection::vec(component(), 0..3),
        after in proptest::collection::vec(component(), 0..3),
    ) {
        let list: ExclusionList = [name.clone()].into_iter().collect();
        let mut segments = before.clone();
        segments.push(name.clone());
        segments.extend(after);
        prop_assert!(list.matches(&segments.join("/")));

        // a longer segment that merely starts with the name does not match
        let longer = format!("{}x", name);
        prop_assume!(!before.contains(&name));
        let longer_path = format!("{}/{}", before.join("/"), longer);
        prop_assert!(!list.matches(&longer_path));
    }

    /// PROPERTY: Matching never panics on arbitrary paths.
    #[test]
    fn property_matches_never_panics(path in "(?s).{0,128}") {
        let list = build_exclusions(&["polymer"], &THIRD_PARTY_SCRIPTS);
        let _ = list.matches(&path);
    }
}
