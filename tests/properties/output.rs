//! Property tests for output naming and the license header.

use std::path::Path;

use proptest::prelude::*;

use tb_vulcanize::domain::services::{prepend_header, LICENSE_HEADER};
use tb_vulcanize::domain::value_objects::OutputSpec;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Overwrite drops the suffix, otherwise it is appended; the base is shared.
    #[test]
    fn property_variant_naming(
        stem in "[a-z][a-z0-9-]{0,16}",
        suffix in "\\.[A-Z]{1,12}",
    ) {
        let entry = format!("components/tf_app/{stem}.html");
        let canonical = OutputSpec::new(&entry, &suffix, true);
        let variant = OutputSpec::new(&entry, &suffix, false);

        prop_assert_eq!(canonical.file_name(), format!("{stem}.html"));
        prop_assert!(variant.file_name().ends_with(&suffix));
        prop_assert_eq!(variant.file_name(), format!("{}{}", canonical.file_name(), suffix));
        let path = variant.output_path(Path::new("dist"));
        prop_assert_eq!(path.parent(), Some(Path::new("dist")));
    }

    /// PROPERTY: The header is prepended byte for byte and the body kept verbatim.
    #[test]
    fn property_header_prefix(body in "(?s).{0,256}") {
        let out = prepend_header(&body);
        prop_assert!(out.starts_with(LICENSE_HEADER));
        prop_assert_eq!(&out[LICENSE_HEADER.len()..], body.as_str());
    }
}
