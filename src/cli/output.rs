//! Output formatting for the binary: JSON, YAML and human-readable text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::repo_url::ParsedRepoUrl;
use crate::stack::StackDetectionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_scan(&self, result: &StackDetectionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(result),
            OutputFormat::Yaml => to_yaml(result),
            OutputFormat::Human => Ok(self.scan_human(result)),
        }
    }

    pub fn format_repo_url(&self, parsed: &ParsedRepoUrl) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(parsed),
            OutputFormat::Yaml => to_yaml(parsed),
            OutputFormat::Human => Ok(self.repo_url_human(parsed)),
        }
    }

    fn scan_human(&self, result: &StackDetectionResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Workspace: {}", result.scanned_path);

        if result.is_empty() {
            let _ = writeln!(out, "\nNo known manifests found.");
            return out;
        }

        let _ = writeln!(out, "\nLanguages:");
        for lang in &result.languages {
            let _ = write!(
                out,
                "  {:<12} {:.2}  manifests: {}",
                lang.name.display_name(),
                lang.confidence,
                lang.manifests.join(", ")
            );
            if !lang.frameworks.is_empty() {
                let _ = write!(out, "  frameworks: {}", lang.frameworks.join(", "));
            }
            out.push('\n');
        }

        let _ = writeln!(out, "\nRecommendations:");
        for rec in &result.recommendations {
            let _ = writeln!(
                out,
                "  {:<10} {:<20} {}",
                rec.category.as_str(),
                rec.id,
                rec.reason
            );
        }
        out
    }

    fn repo_url_human(&self, parsed: &ParsedRepoUrl) -> String {
        let provider = if parsed.has_known_provider() {
            parsed.provider.as_str()
        } else {
            "(unknown)"
        };
        format!(
            "Owner:    {}\nRepo:     {}\nHost:     {}\nProvider: {}\n",
            parsed.owner, parsed.repo, parsed.host, provider
        )
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).context("Failed to serialize output to YAML")
}
