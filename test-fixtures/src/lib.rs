//! Test fixture loader for golden scoring scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use spiral_core::models::{ExplicitScore, FacetCode, FacetScores, FeatureBag, Phase};

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

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A feature bag with the facet scores it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetGolden {
    pub description: String,
    pub features: FeatureBag,
    pub expected_scores: BTreeMap<FacetCode, u8>,
    pub expected_confidence: f64,
}

/// A full-pipeline scenario: bag, self-reports, history, and expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentGolden {
    pub description: String,
    pub features: FeatureBag,
    #[serde(default)]
    pub explicit_scores: BTreeMap<FacetCode, ExplicitScore>,
    #[serde(default)]
    pub previous_scores: Option<FacetScores>,
    pub now: String,
    pub expected: ExpectedAssessment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedAssessment {
    pub primary_phase: Phase,
    pub secondary_phase: Phase,
    pub final_scores: BTreeMap<FacetCode, u8>,
    pub alert_codes: Vec<String>,
    pub calibration_needed: Vec<FacetCode>,
}

/// Load every golden facet scenario.
pub fn facet_goldens() -> Vec<(String, FacetGolden)> {
    list_fixtures("golden/facets")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let golden = load_fixture(&format!("golden/facets/{name}"));
            (name, golden)
        })
        .collect()
}

/// Load every full-pipeline scenario.
pub fn assessment_goldens() -> Vec<(String, AssessmentGolden)> {
    list_fixtures("golden/assessment")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let golden = load_fixture(&format!("golden/assessment/{name}"));
            (name, golden)
        })
        .collect()
}
