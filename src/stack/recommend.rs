//! Expands detected languages into actionable recommendations.

use super::catalog;
use super::LanguageId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Mode,
    Pipeline,
    Linter,
    Formatter,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Mode => "mode",
            RecommendationCategory::Pipeline => "pipeline",
            RecommendationCategory::Linter => "linter",
            RecommendationCategory::Formatter => "formatter",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single suggestion surfaced to the user or fed to backend selection.
///
/// Two recommendations are the same suggestion when they share
/// `(category, id)`; `name` and `reason` are presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub category: RecommendationCategory,
    pub id: String,
    pub name: String,
    pub reason: String,
}

impl ToolRecommendation {
    pub fn key(&self) -> (RecommendationCategory, &str) {
        (self.category, self.id.as_str())
    }
}

/// Recommendations for one language: core modes, core pipelines, then the
/// catalog's linters and formatters.
///
/// Any language yields the core modes and pipelines, including ones the
/// catalog does not know; only the tool section can be empty.
pub fn recommendations_for_language(lang: &LanguageId) -> Vec<ToolRecommendation> {
    let mut recs = catalog::core_mode_recommendations(lang);
    recs.extend(catalog::core_pipeline_recommendations(lang));
    recs.extend(catalog::tool_specs(lang).iter().map(|spec| spec.to_recommendation()));
    recs
}

/// Ordered accumulator that keeps the first recommendation per `(category, id)`.
#[derive(Debug, Default)]
pub struct RecommendationSet {
    seen: HashSet<(RecommendationCategory, String)>,
    items: Vec<ToolRecommendation>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an equal `(category, id)` was already accepted.
    pub fn insert(&mut self, rec: ToolRecommendation) -> bool {
        if !self.seen.insert((rec.category, rec.id.clone())) {
            return false;
        }
        self.items.push(rec);
        true
    }

    pub fn extend_from_language(&mut self, lang: &LanguageId) -> usize {
        recommendations_for_language(lang)
            .into_iter()
            .filter(|rec| self.insert(rec.clone()))
            .count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<ToolRecommendation> {
        self.items
    }
}
