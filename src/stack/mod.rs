//! Workspace stack detection and recommendation.
//!
//! The [`catalog`] holds the static manifest, framework and tool tables. The
//! [`StackDetector`] classifies a workspace against it, and [`recommend`]
//! turns each detected language into deduplicated suggestions.
//!
//! # Example
//!
//! ```no_run
//! use repoprobe::stack::{scan_workspace, LanguageId};
//!
//! # fn main() -> anyhow::Result<()> {
//! let result = scan_workspace("/srv/checkouts/api")?;
//!
//! if let Some(go) = result.language(&LanguageId::Go) {
//!     println!("go {:.1} frameworks={:?}", go.confidence, go.frameworks);
//! }
//! for rec in &result.recommendations {
//!     println!("{}:{} - {}", rec.category, rec.id, rec.reason);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod catalog;
pub mod detection;
pub mod detector;
pub mod language_id;
pub mod recommend;

pub use catalog::{FrameworkRule, ToolSpec};
pub use detection::{Language, StackDetectionResult};
pub use detector::{scan_workspace, ScanError, StackDetector};
pub use language_id::LanguageId;
pub use recommend::{
    recommendations_for_language, RecommendationCategory, RecommendationSet, ToolRecommendation,
};
