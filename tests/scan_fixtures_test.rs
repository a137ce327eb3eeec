//! Workspace scans against on-disk fixtures

mod support;

use repoprobe::stack::catalog;
use repoprobe::{
    scan_workspace, LanguageId, RecommendationCategory, ScanConfig, ScanError, StackDetector,
};
use std::collections::HashSet;
use std::fs;
use support::{fixture_path, ids_in, language};
use tempfile::TempDir;
use yare::parameterized;

#[parameterized(
    go_chi = { "go-chi", LanguageId::Go, &["chi"] },
    node_typescript = { "node-typescript", LanguageId::TypeScript, &["nextjs", "react"] },
    python_django = { "python-django", LanguageId::Python, &["django"] },
    rust_axum = { "rust-axum", LanguageId::Rust, &["axum", "tokio"] },
    ruby_rails = { "ruby-rails", LanguageId::Ruby, &["rails"] },
)]
fn test_single_language(fixture_name: &str, expected: LanguageId, frameworks: &[&str]) {
    let result = scan_workspace(fixture_path("single-language", fixture_name))
        .expect("Scan failed");

    assert_eq!(result.languages.len(), 1, "languages: {:?}", result.languages);
    let lang = language(&result, &expected);
    assert_eq!(lang.frameworks, frameworks);
    assert!(!lang.manifests.is_empty());
    assert!((0.0..=1.0).contains(&lang.confidence));

    assert_eq!(ids_in(&result, RecommendationCategory::Mode).len(), 5);
    assert_eq!(ids_in(&result, RecommendationCategory::Pipeline).len(), 2);
    assert!(!ids_in(&result, RecommendationCategory::Linter).is_empty());
}

#[test]
fn test_typescript_fixture_merges_package_json() {
    let result = scan_workspace(fixture_path("single-language", "node-typescript")).unwrap();

    let ts = language(&result, &LanguageId::TypeScript);
    assert_eq!(ts.manifests, vec!["tsconfig.json", "package.json"]);
    assert_eq!(ts.confidence, 0.9);
    assert!(result.language(&LanguageId::JavaScript).is_none());
}

#[test]
fn test_rust_fixture_confidence_counts_lockfile() {
    let result = scan_workspace(fixture_path("single-language", "rust-axum")).unwrap();

    let rust = language(&result, &LanguageId::Rust);
    assert_eq!(rust.manifests, vec!["Cargo.lock", "Cargo.toml"]);
    assert_eq!(rust.confidence, 0.9);
}

#[test]
fn test_polyglot_fixture() {
    let result = scan_workspace(fixture_path("polyglot", "api-and-tooling")).unwrap();

    let names: Vec<&LanguageId> = result.languages.iter().map(|l| &l.name).collect();
    assert_eq!(
        names,
        vec![
            &LanguageId::Python,
            &LanguageId::Rust,
            &LanguageId::Make,
            &LanguageId::Docker,
        ]
    );
    assert_eq!(language(&result, &LanguageId::Python).frameworks, vec!["fastapi"]);
    assert!(language(&result, &LanguageId::Rust).frameworks.is_empty());

    // Modes and pipelines appear once even though four languages request them.
    assert_eq!(result.recommendations.len(), 13);
    assert_eq!(
        ids_in(&result, RecommendationCategory::Linter),
        vec!["ruff", "clippy", "checkmake", "hadolint"]
    );
    assert_eq!(
        ids_in(&result, RecommendationCategory::Formatter),
        vec!["black", "rustfmt"]
    );
}

#[test]
fn test_recommendation_keys_unique() {
    let result = scan_workspace(fixture_path("polyglot", "api-and-tooling")).unwrap();

    let mut seen = HashSet::new();
    for rec in &result.recommendations {
        assert!(seen.insert(rec.key()), "duplicate recommendation {:?}", rec.key());
    }
}

#[test]
fn test_nested_manifests_ignored() {
    let result = scan_workspace(fixture_path("edge-cases", "nested-only")).unwrap();
    assert!(result.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn test_docs_only_workspace() {
    let result = scan_workspace(fixture_path("edge-cases", "docs-only")).unwrap();
    assert!(result.languages.is_empty());
    assert!(result.primary_language().is_none());
}

#[test]
fn test_scan_is_idempotent() {
    let path = fixture_path("polyglot", "api-and-tooling");
    let first = scan_workspace(&path).unwrap();
    let second = scan_workspace(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_detected_manifest_is_in_catalog() {
    let result = scan_workspace(fixture_path("polyglot", "api-and-tooling")).unwrap();
    for lang in &result.languages {
        for manifest in &lang.manifests {
            assert!(catalog::is_manifest(manifest), "{} not in catalog", manifest);
        }
    }
}

#[test]
fn test_missing_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    match scan_workspace(&missing) {
        Err(ScanError::NotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_file_instead_of_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("go.mod");
    fs::write(&file, "module x\n").unwrap();

    assert!(matches!(
        scan_workspace(&file),
        Err(ScanError::NotADirectory(_))
    ));
}

#[test]
fn test_directory_named_like_manifest_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("package.json")).unwrap();
    fs::write(dir.path().join("Makefile"), "all:\n").unwrap();

    let result = scan_workspace(dir.path()).unwrap();
    assert_eq!(result.languages.len(), 1);
    assert_eq!(result.languages[0].name, LanguageId::Make);
}

#[test]
fn test_manifest_read_limit_hides_late_dependencies() {
    let dir = TempDir::new().unwrap();
    let mut go_mod = String::from("module example.com/big\n\n");
    go_mod.push_str(&"// padding\n".repeat(64));
    go_mod.push_str("require github.com/gin-gonic/gin v1.10.0\n");
    fs::write(dir.path().join("go.mod"), &go_mod).unwrap();

    let limited = StackDetector::new()
        .with_config(ScanConfig::default().with_max_manifest_bytes(128))
        .scan(dir.path())
        .unwrap();
    assert!(limited.languages[0].frameworks.is_empty());

    let full = scan_workspace(dir.path()).unwrap();
    assert_eq!(full.languages[0].frameworks, vec!["gin"]);
}

#[test]
fn test_invalid_config_rejected_before_scan() {
    let dir = TempDir::new().unwrap();
    let result = StackDetector::new()
        .with_config(ScanConfig::default().with_max_manifest_bytes(0))
        .scan(dir.path());
    assert!(matches!(result, Err(ScanError::Config(_))));
}
