use super::recommend::{RecommendationCategory, ToolRecommendation};
use super::LanguageId;
use serde::{Deserialize, Serialize};

/// A language detected in the workspace root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: LanguageId,
    pub confidence: f64,
    pub manifests: Vec<String>,
    pub frameworks: Vec<String>,
}

impl Language {
    /// Confidence grows with corroborating manifests and saturates at three.
    pub fn confidence_for(manifest_count: usize) -> f64 {
        match manifest_count {
            n if n >= 3 => 1.0,
            2 => 0.9,
            _ => 0.7,
        }
    }

    pub fn has_framework(&self, framework: &str) -> bool {
        self.frameworks.iter().any(|f| f == framework)
    }
}

/// Output of a workspace scan, serialised for UIs and backend selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDetectionResult {
    pub languages: Vec<Language>,
    pub recommendations: Vec<ToolRecommendation>,
    pub scanned_path: String,
}

impl StackDetectionResult {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Highest-confidence language; ties resolve to the earlier entry.
    pub fn primary_language(&self) -> Option<&Language> {
        self.languages.iter().fold(None, |best: Option<&Language>, lang| match best {
            Some(b) if b.confidence >= lang.confidence => Some(b),
            _ => Some(lang),
        })
    }

    pub fn language(&self, id: &LanguageId) -> Option<&Language> {
        self.languages.iter().find(|l| &l.name == id)
    }

    pub fn recommendations_in(
        &self,
        category: RecommendationCategory,
    ) -> impl Iterator<Item = &ToolRecommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(name: LanguageId, manifests: &[&str]) -> Language {
        Language {
            name,
            confidence: Language::confidence_for(manifests.len()),
            manifests: manifests.iter().map(|m| m.to_string()).collect(),
            frameworks: vec![],
        }
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(Language::confidence_for(1), 0.7);
        assert_eq!(Language::confidence_for(2), 0.9);
        assert_eq!(Language::confidence_for(3), 1.0);
        assert_eq!(Language::confidence_for(7), 1.0);
    }

    #[test]
    fn test_confidence_is_monotonic() {
        let mut previous = 0.0;
        for count in 1..10 {
            let confidence = Language::confidence_for(count);
            assert!(confidence >= previous);
            assert!([0.7, 0.9, 1.0].contains(&confidence));
            previous = confidence;
        }
    }

    #[test]
    fn test_primary_language() {
        let result = StackDetectionResult {
            languages: vec![
                language(LanguageId::Docker, &["Dockerfile"]),
                language(LanguageId::Rust, &["Cargo.toml", "Cargo.lock"]),
                language(LanguageId::Python, &["setup.py", "setup.cfg"]),
            ],
            recommendations: vec![],
            scanned_path: "/repo".to_string(),
        };

        assert_eq!(result.primary_language().unwrap().name, LanguageId::Rust);
        assert!(result.language(&LanguageId::Python).is_some());
        assert!(result.language(&LanguageId::Go).is_none());
    }

    #[test]
    fn test_empty_result_has_no_primary_language() {
        let result = StackDetectionResult {
            languages: vec![],
            recommendations: vec![],
            scanned_path: ".".to_string(),
        };
        assert!(result.is_empty());
        assert!(result.primary_language().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let result = StackDetectionResult {
            languages: vec![language(LanguageId::Go, &["go.mod"])],
            recommendations: vec![],
            scanned_path: "/src/app".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["languages"][0]["name"], "go");
        assert_eq!(json["languages"][0]["confidence"], 0.7);
        assert_eq!(json["scanned_path"], "/src/app");
    }
}
