//! Property tests for merging the gist listing with the mapping file.

use std::collections::BTreeMap;

use proptest::prelude::*;

use gist_sync::domain::entities::{Mapping, RemoteIndex};
use gist_sync::domain::ports::RemoteGist;

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}\\.(py|sh|rb)").unwrap()
}

fn gist_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{8}").unwrap()
}

fn listing() -> impl Strategy<Value = Vec<(String, String, bool)>> {
    proptest::collection::vec((file_name(), gist_id(), any::<bool>()), 0..12)
}

fn mapping_entries() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map(file_name(), gist_id(), 0..8)
}

fn remote(entries: &[(String, String, bool)]) -> Vec<RemoteGist> {
    entries
        .iter()
        .map(|(name, id, public)| RemoteGist {
            id: id.clone(),
            public: *public,
            url: format!("https://gist.github.com/{id}"),
            files: vec![name.clone()],
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every mapping entry resolves to the mapped id, whatever the listing says.
    #[test]
    fn property_mapping_always_wins(listed in listing(), mapped in mapping_entries()) {
        let (mut index, _) = RemoteIndex::from_listing(&remote(&listed));
        let mut mapping = Mapping::new();
        for (name, id) in &mapped {
            mapping.record(name.clone(), id, "u");
        }
        index.merge_mapping(&mapping);

        for (name, id) in &mapped {
            prop_assert_eq!(index.get(name), Some(id.as_str()));
        }
    }

    /// PROPERTY: names only the listing knows resolve to the last private gist listed for them.
    #[test]
    fn property_unmapped_names_come_from_private_listing(listed in listing(), mapped in mapping_entries()) {
        let (mut index, _) = RemoteIndex::from_listing(&remote(&listed));
        let mut mapping = Mapping::new();
        for (name, id) in &mapped {
            mapping.record(name.clone(), id, "u");
        }
        index.merge_mapping(&mapping);

        let mut expected: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, id, public) in &listed {
            if !public {
                expected.insert(name, id);
            }
        }

        for (name, _, _) in &listed {
            if mapped.contains_key(name) {
                continue;
            }
            prop_assert_eq!(index.get(name), expected.get(name.as_str()).copied());
        }
    }

    /// PROPERTY: the merged index never grows beyond listing + mapping names.
    #[test]
    fn property_index_size_is_bounded(listed in listing(), mapped in mapping_entries()) {
        let (mut index, _) = RemoteIndex::from_listing(&remote(&listed));
        let mut mapping = Mapping::new();
        for (name, id) in &mapped {
            mapping.record(name.clone(), id, "u");
        }
        index.merge_mapping(&mapping);

        let mut names: std::collections::BTreeSet<&str> =
            listed.iter().map(|(n, _, _)| n.as_str()).collect();
        names.extend(mapped.keys().map(String::as_str));
        prop_assert!(index.len() <= names.len());
    }
}
