//! Fixture loader for postgate scenario posts and corpora.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
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

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// What a scenario fixture expects from validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Expected {
    pub passes: bool,
    /// Names of checks expected to raise a blocking issue.
    #[serde(default)]
    pub failing_checks: Vec<String>,
    /// Names of checks expected to raise a warning.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// A candidate post with its expected verdict. `P` is the post type of the
/// crate under test.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario<P> {
    pub name: String,
    pub post: P,
    pub expected: Expected,
}

/// Load every scenario under `posts/`.
pub fn load_scenarios<P: DeserializeOwned>() -> Vec<Scenario<P>> {
    list_fixtures("posts")
        .iter()
        .map(|p| {
            let name = p
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("Bad fixture file name {}", p.display()));
            load_fixture(&format!("posts/{name}"))
        })
        .collect()
}

/// Load one scenario by file stem, e.g. `"clean_post"`.
pub fn load_scenario<P: DeserializeOwned>(stem: &str) -> Scenario<P> {
    load_fixture(&format!("posts/{stem}.json"))
}

/// The accepted-posts corpus as a list of bodies.
pub fn load_corpus() -> Vec<String> {
    load_fixture("corpus/accepted.json")
}
