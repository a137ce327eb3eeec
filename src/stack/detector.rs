//! Workspace stack detection.
//!
//! A scan looks only at the top level of a workspace. Every file whose name
//! is a known manifest is attributed to its language and its head is read
//! once for framework matching. A failed read degrades to empty content, so
//! one unreadable manifest never aborts the scan.

use super::catalog;
use super::detection::{Language, StackDetectionResult};
use super::recommend::RecommendationSet;
use super::LanguageId;
use crate::config::{ConfigError, ScanConfig};
use crate::fs::{FileSystem, RealFileSystem};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to list directory {}: {reason}", .path.display())]
    ReadDir { path: PathBuf, reason: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct StackDetector {
    fs: Arc<dyn FileSystem>,
    config: ScanConfig,
}

impl StackDetector {
    pub fn new() -> Self {
        Self::with_filesystem(Arc::new(RealFileSystem::new()))
    }

    pub fn with_filesystem(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scan(&self, path: impl AsRef<Path>) -> Result<StackDetectionResult, ScanError> {
        let path = path.as_ref();
        self.config.validate()?;

        if !self.fs.exists(path) {
            return Err(ScanError::NotFound(path.to_path_buf()));
        }
        if !self.fs.is_dir(path) {
            return Err(ScanError::NotADirectory(path.to_path_buf()));
        }

        let start = Instant::now();
        info!(path = %path.display(), "Scanning workspace");

        let mut entries = self.fs.read_dir(path).map_err(|err| ScanError::ReadDir {
            path: path.to_path_buf(),
            reason: format!("{:#}", err),
        })?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut manifests: BTreeMap<LanguageId, Vec<String>> = BTreeMap::new();
        let mut contents: HashMap<String, String> = HashMap::new();

        for entry in entries.iter().filter(|e| !e.is_dir()) {
            if let Some(lang) = catalog::language_for_manifest(entry.file_name()) {
                debug!(manifest = entry.file_name(), language = %lang, "Found manifest");
                manifests
                    .entry(lang)
                    .or_default()
                    .push(entry.file_name().to_string());
                contents
                    .entry(entry.file_name().to_string())
                    .or_insert_with(|| self.read_manifest(entry.path()));
            }
        }

        merge_javascript_into_typescript(&mut manifests);

        let mut languages: Vec<Language> = manifests
            .into_iter()
            .map(|(name, manifests)| {
                let frameworks = detect_frameworks(&name, &manifests, &contents);
                Language {
                    confidence: Language::confidence_for(manifests.len()),
                    name,
                    manifests,
                    frameworks,
                }
            })
            .collect();
        // Stable: equal confidence keeps catalog order.
        languages.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let mut recommendations = RecommendationSet::new();
        for lang in &languages {
            recommendations.extend_from_language(&lang.name);
        }

        info!(
            path = %path.display(),
            languages = languages.len(),
            recommendations = recommendations.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Workspace scan complete"
        );

        Ok(StackDetectionResult {
            languages,
            recommendations: recommendations.into_vec(),
            scanned_path: path.display().to_string(),
        })
    }

    fn read_manifest(&self, path: &Path) -> String {
        match self.fs.read_bytes(path, self.config.max_manifest_bytes) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                debug!(
                    manifest = %path.display(),
                    error = %err,
                    "Manifest unreadable, continuing without content"
                );
                String::new()
            }
        }
    }
}

impl Default for StackDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans `path` on the real filesystem with the default configuration.
pub fn scan_workspace(path: impl AsRef<Path>) -> Result<StackDetectionResult, ScanError> {
    StackDetector::new().scan(path)
}

/// A tsconfig.json next to JavaScript manifests means the sources are
/// TypeScript; the JavaScript entry folds into it and disappears.
fn merge_javascript_into_typescript(manifests: &mut BTreeMap<LanguageId, Vec<String>>) {
    if !manifests.contains_key(&LanguageId::TypeScript) {
        return;
    }
    if let Some(javascript) = manifests.remove(&LanguageId::JavaScript) {
        debug!(merged = ?javascript, "Merging JavaScript manifests into TypeScript");
        if let Some(typescript) = manifests.get_mut(&LanguageId::TypeScript) {
            typescript.extend(javascript);
        }
    }
}

fn detect_frameworks(
    lang: &LanguageId,
    manifests: &[String],
    contents: &HashMap<String, String>,
) -> Vec<String> {
    let mut frameworks: Vec<String> = Vec::new();

    for rule in catalog::framework_rules(lang) {
        if !manifests.iter().any(|m| m == rule.manifest) {
            continue;
        }
        let matched = contents
            .get(rule.manifest)
            .map(|content| content.contains(rule.needle))
            .unwrap_or(false);

        if matched && !frameworks.iter().any(|f| f == rule.framework) {
            frameworks.push(rule.framework.to_string());
        }
    }

    frameworks
}
