//! Property tests for `.gistignore` matching.

use std::path::Path;

use proptest::prelude::*;

use gist_sync::domain::value_objects::IgnorePatterns;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap()
}

fn extension() -> impl Strategy<Value = String> {
    prop_oneof![Just("py"), Just("sh"), Just("rb"), Just("pl")].prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a literal file name pattern ignores exactly that name.
    #[test]
    fn property_literal_pattern_matches_itself(name in stem(), other in stem(), ext in extension()) {
        let file = format!("{name}.{ext}");
        let patterns = IgnorePatterns::from_content(Path::new(".gistignore"), &file).unwrap();

        prop_assert!(patterns.is_ignored(&file));
        if other != name {
            let other_file = format!("{other}.{ext}");
            prop_assert!(!patterns.is_ignored(&other_file));
        }
    }

    /// PROPERTY: `*.ext` ignores every file with that extension and nothing else.
    #[test]
    fn property_extension_glob(name in stem(), ext in extension(), other_ext in extension()) {
        let patterns =
            IgnorePatterns::from_content(Path::new(".gistignore"), &format!("*.{ext}")).unwrap();

        let file = format!("{name}.{ext}");
        prop_assert!(patterns.is_ignored(&file));
        let other_file = format!("{name}.{other_ext}");
        prop_assert_eq!(patterns.is_ignored(&other_file), other_ext == ext);
    }

    /// PROPERTY: comments and blank lines never ignore anything.
    #[test]
    fn property_comments_are_inert(name in stem(), ext in extension()) {
        let file = format!("{name}.{ext}");
        let content = format!("# {file}\n\n   \n");
        let patterns = IgnorePatterns::from_content(Path::new(".gistignore"), &content).unwrap();

        prop_assert!(patterns.is_empty());
        prop_assert!(!patterns.is_ignored(&file));
    }

    /// PROPERTY: pushing a pattern behaves like loading it from the file.
    #[test]
    fn property_push_matches_load(name in stem(), ext in extension()) {
        let file = format!("{name}.{ext}");
        let mut pushed = IgnorePatterns::empty();
        pushed.push(&file).unwrap();
        let loaded = IgnorePatterns::from_content(Path::new(".gistignore"), &file).unwrap();

        prop_assert_eq!(pushed.is_ignored(&file), loaded.is_ignored(&file));
        prop_assert_eq!(pushed.patterns(), loaded.patterns());
    }
}
