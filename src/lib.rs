//! repoprobe - repository onboarding probe
//!
//! The pieces a coding-agent platform needs when a repository is registered:
//! resolving a git remote into owner, repo and provider; admitting or
//! rejecting project create/update payloads; and inspecting a checked-out
//! workspace to recommend agent modes, pipelines, linters and formatters.
//!
//! # Example Usage
//!
//! ```no_run
//! use repoprobe::{parse_repo_url, scan_workspace, validate_create_request, CreateRequest};
//!
//! # fn main() -> anyhow::Result<()> {
//! let parsed = parse_repo_url("git@github.com:octocat/hello-world.git")?;
//! assert_eq!(parsed.full_name(), "octocat/hello-world");
//!
//! let request = CreateRequest {
//!     name: "hello-world".to_string(),
//!     repo_url: "git@github.com:octocat/hello-world.git".to_string(),
//!     ..Default::default()
//! };
//! validate_create_request(&request, &["claude", "codex"])?;
//!
//! let stack = scan_workspace("/srv/checkouts/hello-world")?;
//! if let Some(primary) = stack.primary_language() {
//!     println!("primary language: {}", primary.name.display_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`repo_url`]: git remote URL parsing and provider inference
//! - [`validation`]: project request admission rules
//! - [`stack`]: manifest catalog, workspace scanning and recommendations
//! - [`fs`]: filesystem abstraction used by the scanner
//! - [`config`]: scan limits
//! - [`cli`]: argument parsing and output formatting for the binary

pub mod cli;
pub mod config;
pub mod fs;
pub mod repo_url;
pub mod stack;
pub mod util;
pub mod validation;

pub use config::{ConfigError, ScanConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use repo_url::{is_valid_repo_url, parse_repo_url, ParsedRepoUrl, UrlError};
pub use stack::{
    scan_workspace, Language, LanguageId, RecommendationCategory, ScanError,
    StackDetectionResult, StackDetector, ToolRecommendation,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};
pub use validation::{
    validate_create_request, validate_update_request, CreateRequest, UpdateRequest,
    ValidationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_repoprobe() {
        assert_eq!(NAME, "repoprobe");
    }
}
