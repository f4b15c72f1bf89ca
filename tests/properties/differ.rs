//! Property tests for content comparison in diff mode.

use proptest::prelude::*;

use gist_sync::domain::services::Differ;

fn text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z =()0-9]{0,20}", 0..8).prop_map(|lines| {
        lines
            .into_iter()
            .map(|l| format!("{l}\n"))
            .collect::<String>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical content never reports changes.
    #[test]
    fn property_identical_content_is_unchanged(content in text()) {
        let diff = Differ::new().compare("a.py", &content, &content);
        prop_assert!(!diff.has_changes);
        prop_assert!(diff.unified.is_empty());
    }

    /// PROPERTY: different content always reports changes with both headers.
    #[test]
    fn property_different_content_has_headers(remote in text(), local in text()) {
        prop_assume!(remote != local);
        let diff = Differ::new().compare("a.py", &remote, &local);

        prop_assert!(diff.has_changes);
        prop_assert!(diff.unified.contains("a.py (gist)"));
        prop_assert!(diff.unified.contains("a.py (local)"));
    }
}
