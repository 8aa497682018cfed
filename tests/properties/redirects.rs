//! Property tests for component names and redirects.

use proptest::prelude::*;

use tb_vulcanize::domain::ports::StaticComponents;
use tb_vulcanize::domain::services::{build_redirects, ComponentInventory, FIRST_PARTY_PREFIXES};
use tb_vulcanize::domain::value_objects::{ComponentName, PathRedirect};

fn first_party_dir() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("tf"), Just("vz")],
        prop_oneof![Just("_"), Just("-")],
        proptest::string::string_regex("[a-z][a-z0-9_-]{0,12}").unwrap(),
    )
        .prop_map(|(prefix, sep, rest)| format!("{prefix}{sep}{rest}"))
}

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Name normalization never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = ComponentName::parse(&s);
    }

    /// PROPERTY: Canonical names contain no dashes and the dash form no underscores.
    #[test]
    fn property_canonical_and_dash_forms(dir in first_party_dir()) {
        let name = ComponentName::parse(&dir).unwrap();
        prop_assert!(!name.as_str().contains('-'));
        prop_assert!(!name.dash_form().contains('_'));
        prop_assert_eq!(name.dash_form().replace('-', "_"), name.as_str());
        prop_assert!(name.is_first_party(&FIRST_PARTY_PREFIXES));
    }

    /// PROPERTY: Each redirect maps `root/<dash form>` to `root/<name>`.
    #[test]
    fn property_redirect_shape(dirs in proptest::collection::btree_set(first_party_dir(), 1..8)) {
        let names: Vec<ComponentName> = dirs.iter().map(|d| ComponentName::parse(d).unwrap()).collect();
        let redirects = build_redirects("components", &names);

        prop_assert_eq!(redirects.len(), names.len());
        for (redirect, name) in redirects.iter().zip(&names) {
            prop_assert_eq!(redirect.from_path(), format!("components/{}", name.dash_form()));
            prop_assert_eq!(redirect.to_path(), format!("components/{}", name.as_str()));
        }
    }

    /// PROPERTY: Applying a redirect keeps everything below the component directory.
    #[test]
    fn property_redirect_preserves_suffix(
        dir in first_party_dir(),
        rest in proptest::collection::vec(segment(), 1..4),
    ) {
        let name = ComponentName::parse(&dir).unwrap();
        let redirect = &build_redirects("components", &[name.clone()])[0];
        let suffix = rest.join("/");

        let applied = redirect.apply(&format!("{}/{}", redirect.from_path(), suffix));
        prop_assert_eq!(applied, Some(format!("components/{}/{}", name.as_str(), suffix)));

        // a sibling sharing the prefix is not captured
        prop_assert_eq!(redirect.apply(&format!("{}x/{}", redirect.from_path(), suffix)), None);
    }

    /// PROPERTY: `from|to` display parses back to the same redirect.
    #[test]
    fn property_redirect_display_parses(dir in first_party_dir()) {
        let name = ComponentName::parse(&dir).unwrap();
        let redirect = &build_redirects("components", &[name])[0];
        let parsed: PathRedirect = redirect.to_string().parse().unwrap();
        prop_assert_eq!(&parsed, redirect);
    }

    /// PROPERTY: Inventory splits every directory into exactly one side.
    #[test]
    fn property_inventory_partitions(
        first in proptest::collection::btree_set(
            proptest::string::string_regex("(tf|vz)_[a-z]{1,8}").unwrap(), 0..6),
        third in proptest::collection::btree_set(
            proptest::string::string_regex("[a-su-uw-z][a-z]{0,8}").unwrap(), 0..6),
    ) {
        let all: Vec<String> = first.iter().chain(third.iter()).cloned().collect();
        let inventory =
            ComponentInventory::resolve(&StaticComponents::new(all), &FIRST_PARTY_PREFIXES)
                .unwrap();

        prop_assert_eq!(inventory.first_party.len(), first.len());
        prop_assert_eq!(inventory.third_party.len(), third.len());
        for name in &inventory.third_party {
            prop_assert!(third.contains(name));
        }
    }
}
