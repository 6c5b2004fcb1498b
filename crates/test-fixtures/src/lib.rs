//! Test fixture loader for kindred golden datasets.
//!
//! - `critics.json`: seven film critics rating six films on a 1.0-5.0 scale.
//! - `bookmarks.json`: users and the links they saved, for implicit
//!   (binary) feedback.

use std::collections::BTreeMap;
use std::path::PathBuf;

use kindred_core::constants::UNRATED_SENTINEL;
use kindred_core::{PreferenceStore, PreferenceStoreBuilder};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The critics fixture as a preference store.
pub fn critics() -> PreferenceStore {
    load_fixture("critics.json")
}

/// The bookmarks fixture as a dense binary store: 1.0 where a user saved a
/// link, 0.0 for every other link anyone saved. Users with no bookmarks
/// still appear with all-zero rows.
pub fn bookmarks() -> PreferenceStore {
    let raw: BTreeMap<String, Vec<String>> = load_fixture("bookmarks.json");
    let mut builder = PreferenceStoreBuilder::new();
    for (user, links) in raw {
        builder.ensure_entity(user.clone());
        for link in links {
            builder.mark(user.clone(), link);
        }
    }
    builder.fill_missing(UNRATED_SENTINEL);
    builder.build()
}
