//! Static knowledge base behind stack detection.
//!
//! Three tables live here:
//!
//! - manifest filename to [`LanguageId`]
//! - per-language framework rules, matched by plain substring containment
//!   against manifest content (no JSON/TOML parsing)
//! - per-language linter and formatter suggestions
//!
//! plus the mode and pipeline recommendations emitted for every language.
//! Everything is `const` data; nothing is built or mutated at runtime, so the
//! tables can be read from any thread without synchronisation.

use super::recommend::{RecommendationCategory, ToolRecommendation};
use super::LanguageId;

/// Fires when `manifest` was found and its content contains `needle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkRule {
    pub manifest: &'static str,
    pub needle: &'static str,
    pub framework: &'static str,
}

/// A catalog-provided linter or formatter suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub category: RecommendationCategory,
    pub id: &'static str,
    pub name: &'static str,
    pub reason: &'static str,
}

impl ToolSpec {
    pub fn to_recommendation(&self) -> ToolRecommendation {
        ToolRecommendation {
            category: self.category,
            id: self.id.to_string(),
            name: self.name.to_string(),
            reason: self.reason.to_string(),
        }
    }
}

const MANIFESTS: &[(&str, LanguageId)] = &[
    ("go.mod", LanguageId::Go),
    ("go.sum", LanguageId::Go),
    ("package.json", LanguageId::JavaScript),
    ("package-lock.json", LanguageId::JavaScript),
    ("yarn.lock", LanguageId::JavaScript),
    ("pnpm-lock.yaml", LanguageId::JavaScript),
    ("tsconfig.json", LanguageId::TypeScript),
    ("pyproject.toml", LanguageId::Python),
    ("setup.py", LanguageId::Python),
    ("setup.cfg", LanguageId::Python),
    ("requirements.txt", LanguageId::Python),
    ("Pipfile", LanguageId::Python),
    ("Cargo.toml", LanguageId::Rust),
    ("Cargo.lock", LanguageId::Rust),
    ("pom.xml", LanguageId::Java),
    ("build.gradle", LanguageId::Java),
    ("build.gradle.kts", LanguageId::Java),
    ("Gemfile", LanguageId::Ruby),
    ("Gemfile.lock", LanguageId::Ruby),
    ("composer.json", LanguageId::Php),
    ("Makefile", LanguageId::Make),
    ("CMakeLists.txt", LanguageId::CMake),
    ("Dockerfile", LanguageId::Docker),
];

const fn rule(manifest: &'static str, needle: &'static str, framework: &'static str) -> FrameworkRule {
    FrameworkRule {
        manifest,
        needle,
        framework,
    }
}

const GO_FRAMEWORKS: &[FrameworkRule] = &[
    rule("go.mod", "github.com/go-chi", "chi"),
    rule("go.mod", "github.com/gin-gonic/gin", "gin"),
    rule("go.mod", "github.com/labstack/echo", "echo"),
    rule("go.mod", "github.com/gofiber/fiber", "fiber"),
    rule("go.mod", "github.com/gorilla/mux", "gorilla"),
    rule("go.mod", "google.golang.org/grpc", "grpc"),
    rule("go.mod", "github.com/spf13/cobra", "cobra"),
];

// Shared by JavaScript and TypeScript: after the merge the TypeScript entry
// owns package.json.
const NODE_FRAMEWORKS: &[FrameworkRule] = &[
    rule("package.json", "\"next\"", "nextjs"),
    rule("package.json", "\"react\"", "react"),
    rule("package.json", "\"vue\"", "vue"),
    rule("package.json", "\"svelte\"", "svelte"),
    rule("package.json", "\"@angular/core\"", "angular"),
    rule("package.json", "\"@nestjs/core\"", "nestjs"),
    rule("package.json", "\"express\"", "express"),
    rule("package.json", "\"fastify\"", "fastify"),
];

const PYTHON_FRAMEWORKS: &[FrameworkRule] = &[
    rule("pyproject.toml", "django", "django"),
    rule("pyproject.toml", "Django", "django"),
    rule("requirements.txt", "django", "django"),
    rule("requirements.txt", "Django", "django"),
    rule("Pipfile", "django", "django"),
    rule("pyproject.toml", "fastapi", "fastapi"),
    rule("requirements.txt", "fastapi", "fastapi"),
    rule("Pipfile", "fastapi", "fastapi"),
    rule("pyproject.toml", "flask", "flask"),
    rule("pyproject.toml", "Flask", "flask"),
    rule("requirements.txt", "flask", "flask"),
    rule("requirements.txt", "Flask", "flask"),
    rule("Pipfile", "flask", "flask"),
];

const RUST_FRAMEWORKS: &[FrameworkRule] = &[
    rule("Cargo.toml", "axum", "axum"),
    rule("Cargo.toml", "actix-web", "actix-web"),
    rule("Cargo.toml", "rocket", "rocket"),
    rule("Cargo.toml", "tokio", "tokio"),
];

const JAVA_FRAMEWORKS: &[FrameworkRule] = &[
    rule("pom.xml", "spring-boot", "spring-boot"),
    rule("build.gradle", "spring-boot", "spring-boot"),
    rule("build.gradle.kts", "spring-boot", "spring-boot"),
    rule("pom.xml", "io.quarkus", "quarkus"),
    rule("build.gradle", "io.quarkus", "quarkus"),
    rule("pom.xml", "io.micronaut", "micronaut"),
    rule("build.gradle", "io.micronaut", "micronaut"),
];

const RUBY_FRAMEWORKS: &[FrameworkRule] = &[
    rule("Gemfile", "rails", "rails"),
    rule("Gemfile", "sinatra", "sinatra"),
];

const PHP_FRAMEWORKS: &[FrameworkRule] = &[
    rule("composer.json", "laravel/framework", "laravel"),
    rule("composer.json", "symfony/framework-bundle", "symfony"),
];

const fn linter(id: &'static str, name: &'static str, reason: &'static str) -> ToolSpec {
    ToolSpec {
        category: RecommendationCategory::Linter,
        id,
        name,
        reason,
    }
}

const fn formatter(id: &'static str, name: &'static str, reason: &'static str) -> ToolSpec {
    ToolSpec {
        category: RecommendationCategory::Formatter,
        id,
        name,
        reason,
    }
}

const GO_TOOLS: &[ToolSpec] = &[
    linter(
        "golangci-lint",
        "golangci-lint",
        "Aggregates the standard Go linters in one fast run",
    ),
    formatter("gofmt", "gofmt", "Canonical formatting for Go sources"),
];

const JAVASCRIPT_TOOLS: &[ToolSpec] = &[
    linter("eslint", "ESLint", "De facto linter for JavaScript projects"),
    formatter("prettier", "Prettier", "Opinionated formatter for JS, JSON and CSS"),
];

const TYPESCRIPT_TOOLS: &[ToolSpec] = &[
    linter(
        "eslint",
        "ESLint",
        "Lints TypeScript through the typescript-eslint parser",
    ),
    formatter("prettier", "Prettier", "Opinionated formatter for TS, JSON and CSS"),
];

const PYTHON_TOOLS: &[ToolSpec] = &[
    linter("ruff", "Ruff", "Fast Python linter covering flake8 and isort rules"),
    formatter("black", "Black", "Uncompromising Python code formatter"),
];

const RUST_TOOLS: &[ToolSpec] = &[
    linter("clippy", "Clippy", "Official Rust lint collection"),
    formatter("rustfmt", "rustfmt", "Official Rust formatter"),
];

const JAVA_TOOLS: &[ToolSpec] = &[
    linter("checkstyle", "Checkstyle", "Enforces Java coding standards"),
    formatter(
        "google-java-format",
        "google-java-format",
        "Reformats Java sources to Google style",
    ),
];

const RUBY_TOOLS: &[ToolSpec] = &[
    linter("rubocop", "RuboCop", "Static analyzer for the Ruby style guide"),
    formatter("rubocop", "RuboCop", "Autocorrects layout offenses with --autocorrect"),
];

const PHP_TOOLS: &[ToolSpec] = &[
    linter("phpstan", "PHPStan", "Finds bugs in PHP code without running it"),
    formatter("php-cs-fixer", "PHP CS Fixer", "Fixes PHP code to follow PSR-12"),
];

const MAKE_TOOLS: &[ToolSpec] = &[linter(
    "checkmake",
    "checkmake",
    "Lints Makefiles for common mistakes",
)];

const CMAKE_TOOLS: &[ToolSpec] = &[
    linter("cmake-lint", "cmake-lint", "Checks CMake listfiles for style issues"),
    formatter("cmake-format", "cmake-format", "Formats CMake listfiles"),
];

const DOCKER_TOOLS: &[ToolSpec] = &[linter(
    "hadolint",
    "Hadolint",
    "Lints Dockerfiles against best-practice rules",
)];

/// Looks up the language a top-level manifest filename belongs to.
///
/// Matching is exact and case-sensitive, the way the files are named on disk.
pub fn language_for_manifest(filename: &str) -> Option<LanguageId> {
    MANIFESTS
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, lang)| lang.clone())
}

pub fn is_manifest(filename: &str) -> bool {
    MANIFESTS.iter().any(|(name, _)| *name == filename)
}

pub fn known_manifests() -> impl Iterator<Item = (&'static str, &'static LanguageId)> {
    MANIFESTS.iter().map(|(name, lang)| (*name, lang))
}

pub fn framework_rules(lang: &LanguageId) -> &'static [FrameworkRule] {
    match lang {
        LanguageId::Go => GO_FRAMEWORKS,
        LanguageId::JavaScript | LanguageId::TypeScript => NODE_FRAMEWORKS,
        LanguageId::Python => PYTHON_FRAMEWORKS,
        LanguageId::Rust => RUST_FRAMEWORKS,
        LanguageId::Java => JAVA_FRAMEWORKS,
        LanguageId::Ruby => RUBY_FRAMEWORKS,
        LanguageId::Php => PHP_FRAMEWORKS,
        LanguageId::Make | LanguageId::CMake | LanguageId::Docker | LanguageId::Custom(_) => &[],
    }
}

pub fn tool_specs(lang: &LanguageId) -> &'static [ToolSpec] {
    match lang {
        LanguageId::Go => GO_TOOLS,
        LanguageId::JavaScript => JAVASCRIPT_TOOLS,
        LanguageId::TypeScript => TYPESCRIPT_TOOLS,
        LanguageId::Python => PYTHON_TOOLS,
        LanguageId::Rust => RUST_TOOLS,
        LanguageId::Java => JAVA_TOOLS,
        LanguageId::Ruby => RUBY_TOOLS,
        LanguageId::Php => PHP_TOOLS,
        LanguageId::Make => MAKE_TOOLS,
        LanguageId::CMake => CMAKE_TOOLS,
        LanguageId::Docker => DOCKER_TOOLS,
        LanguageId::Custom(_) => &[],
    }
}

const CORE_MODES: &[(&str, &str, &str)] = &[
    ("coder", "Coder", "Implements features and fixes in the {} codebase"),
    ("reviewer", "Reviewer", "Reviews {} changes before they merge"),
    ("tester", "Tester", "Writes and runs tests for {} code"),
    ("security", "Security", "Audits {} code and dependencies for vulnerabilities"),
    ("architect", "Architect", "Plans structural changes across the {} project"),
];

const CORE_PIPELINES: &[(&str, &str, &str)] = &[
    ("standard-dev", "Standard Development", "Implement-then-review loop for {} changes"),
    ("review-only", "Review Only", "Automated review of {} pull requests without code changes"),
];

fn core_recommendations(
    category: RecommendationCategory,
    table: &[(&str, &str, &str)],
    lang: &LanguageId,
) -> Vec<ToolRecommendation> {
    table
        .iter()
        .map(|(id, name, reason)| ToolRecommendation {
            category,
            id: (*id).to_string(),
            name: (*name).to_string(),
            reason: reason.replacen("{}", lang.display_name(), 1),
        })
        .collect()
}

/// The fixed agent modes offered for any language; only `reason` varies.
pub fn core_mode_recommendations(lang: &LanguageId) -> Vec<ToolRecommendation> {
    core_recommendations(RecommendationCategory::Mode, CORE_MODES, lang)
}

/// The fixed automation pipelines offered for any language; only `reason` varies.
pub fn core_pipeline_recommendations(lang: &LanguageId) -> Vec<ToolRecommendation> {
    core_recommendations(RecommendationCategory::Pipeline, CORE_PIPELINES, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_language_for_manifest() {
        assert_eq!(language_for_manifest("go.mod"), Some(LanguageId::Go));
        assert_eq!(
            language_for_manifest("package.json"),
            Some(LanguageId::JavaScript)
        );
        assert_eq!(
            language_for_manifest("tsconfig.json"),
            Some(LanguageId::TypeScript)
        );
        assert_eq!(language_for_manifest("Pipfile"), Some(LanguageId::Python));
        assert_eq!(language_for_manifest("Makefile"), Some(LanguageId::Make));
        assert_eq!(language_for_manifest("Dockerfile"), Some(LanguageId::Docker));
        assert_eq!(language_for_manifest("README.md"), None);
    }

    #[test]
    fn test_manifest_lookup_is_case_sensitive() {
        assert!(is_manifest("Cargo.toml"));
        assert!(!is_manifest("cargo.toml"));
        assert!(!is_manifest("makefile"));
    }

    #[test]
    fn test_manifest_names_are_unique() {
        let mut seen = HashSet::new();
        for (name, _) in known_manifests() {
            assert!(seen.insert(name), "duplicate manifest {}", name);
        }
    }

    #[test]
    fn test_framework_rules_reference_own_manifests() {
        for lang in LanguageId::all_variants() {
            for rule in framework_rules(lang) {
                let owner = language_for_manifest(rule.manifest).unwrap();
                let merged_node = *lang == LanguageId::TypeScript
                    && owner == LanguageId::JavaScript;
                assert!(
                    owner == *lang || merged_node,
                    "{} rule points at foreign manifest {}",
                    lang,
                    rule.manifest
                );
            }
        }
    }

    #[test]
    fn test_every_catalog_language_has_tools() {
        for lang in LanguageId::all_variants() {
            assert!(!tool_specs(lang).is_empty(), "no tools for {}", lang);
        }
        assert!(tool_specs(&LanguageId::from_key("zig")).is_empty());
    }

    #[test]
    fn test_tool_specs_are_linters_or_formatters() {
        for lang in LanguageId::all_variants() {
            for spec in tool_specs(lang) {
                assert!(matches!(
                    spec.category,
                    RecommendationCategory::Linter | RecommendationCategory::Formatter
                ));
            }
        }
    }

    #[test]
    fn test_core_modes_are_fixed() {
        let ids: Vec<String> = core_mode_recommendations(&LanguageId::Rust)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["coder", "reviewer", "tester", "security", "architect"]);

        let custom = core_mode_recommendations(&LanguageId::from_key("zig"));
        assert_eq!(custom.len(), 5);
        assert!(custom
            .iter()
            .all(|r| r.category == RecommendationCategory::Mode));
    }

    #[test]
    fn test_core_pipelines_mention_language() {
        let pipelines = core_pipeline_recommendations(&LanguageId::Python);
        let ids: Vec<&str> = pipelines.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["standard-dev", "review-only"]);
        assert!(pipelines.iter().all(|r| r.reason.contains("Python")));
        assert!(pipelines.iter().all(|r| !r.reason.contains("{}")));
    }
}
