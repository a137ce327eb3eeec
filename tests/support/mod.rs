//! Shared helpers for integration tests

#![allow(dead_code)]

use repoprobe::{Language, LanguageId, RecommendationCategory, StackDetectionResult};
use std::path::PathBuf;

pub fn fixture_path(category: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(category)
        .join(name)
}

pub fn language<'a>(result: &'a StackDetectionResult, id: &LanguageId) -> &'a Language {
    result
        .language(id)
        .unwrap_or_else(|| panic!("{} not detected in {}", id, result.scanned_path))
}

pub fn ids_in(result: &StackDetectionResult, category: RecommendationCategory) -> Vec<String> {
    result
        .recommendations_in(category)
        .map(|r| r.id.clone())
        .collect()
}
