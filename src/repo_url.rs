//! Git remote URL resolution.
//!
//! Turns the remote strings people paste into a structured
//! `{owner, repo, provider, host}` identity. Two shapes are understood:
//!
//! | Input | owner | repo | provider |
//! |-------|-------|------|----------|
//! | `https://github.com/octocat/hello-world.git` | `octocat` | `hello-world` | `github` |
//! | `git@gitlab.com:group/project.git` | `group` | `project` | `gitlab` |
//! | `https://git.example.org/team/tool` | `team` | `tool` | *(empty)* |
//!
//! Resolution is purely syntactic; nothing here touches the network.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Invalid repository URL format: {0}")]
    InvalidFormat(String),
}

/// Every provider identifier [`provider_from_host`] can return.
pub const KNOWN_PROVIDERS: &[&str] = &["github", "gitlab", "bitbucket", "gitea"];

const PROVIDER_HOSTS: &[(&str, &str)] = &[
    ("github.com", "github"),
    ("gitlab.com", "gitlab"),
    ("bitbucket.org", "bitbucket"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRepoUrl {
    pub owner: String,
    pub repo: String,
    /// Empty when the host is not recognised.
    pub provider: String,
    pub host: String,
}

impl ParsedRepoUrl {
    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn has_known_provider(&self) -> bool {
        !self.provider.is_empty()
    }
}

pub fn parse_repo_url(raw: &str) -> Result<ParsedRepoUrl, UrlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::InvalidFormat("URL is empty".to_string()));
    }

    let parsed = if let Some(rest) = raw.strip_prefix("git@") {
        parse_ssh(rest)?
    } else if raw.starts_with("https://") || raw.starts_with("http://") {
        parse_http(raw)?
    } else {
        return Err(UrlError::InvalidFormat(format!(
            "unsupported scheme in {:?}",
            raw
        )));
    };

    debug!(
        owner = %parsed.owner,
        repo = %parsed.repo,
        host = %parsed.host,
        provider = %parsed.provider,
        "Resolved repository URL"
    );
    Ok(parsed)
}

/// `git@HOST:OWNER/REPO[.git]`
fn parse_ssh(rest: &str) -> Result<ParsedRepoUrl, UrlError> {
    let (host, path) = rest.split_once(':').ok_or_else(|| {
        UrlError::InvalidFormat(format!("missing ':' in SSH URL git@{}", rest))
    })?;
    if host.is_empty() {
        return Err(UrlError::InvalidFormat(
            "missing host in SSH URL".to_string(),
        ));
    }

    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repo) = split_owner_repo(path)?;

    Ok(ParsedRepoUrl {
        owner,
        repo,
        provider: provider_from_host(host).to_string(),
        host: host.to_string(),
    })
}

fn parse_http(raw: &str) -> Result<ParsedRepoUrl, UrlError> {
    // `Url::parse` skips extra slashes after the scheme and would promote
    // the first path segment to host.
    let authority = raw.split_once("://").map(|(_, rest)| rest).unwrap_or_default();
    if authority.is_empty() || authority.starts_with(['/', '\\']) {
        return Err(UrlError::InvalidFormat(format!("missing host in {}", raw)));
    }

    let url = Url::parse(raw).map_err(|e| UrlError::InvalidFormat(format!("{}: {}", raw, e)))?;

    let hostname = match url.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => {
            return Err(UrlError::InvalidFormat(format!("missing host in {}", raw)));
        }
    };
    let host = match url.port() {
        Some(port) => format!("{}:{}", hostname, port),
        None => hostname.to_string(),
    };

    let cleaned = clean_path(url.path());
    let path = cleaned.strip_suffix(".git").unwrap_or(&cleaned);
    let (owner, repo) = split_owner_repo(path.trim_matches('/'))?;

    Ok(ParsedRepoUrl {
        owner,
        repo,
        provider: provider_from_host(hostname).to_string(),
        host,
    })
}

/// Lexically collapses `.`, `..` and repeated slashes. The result has no
/// leading or trailing slash.
fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Takes the first two segments as owner and repo. Anything after them
/// (GitLab subgroups, `/tree/main`, ...) is not part of the identity.
fn split_owner_repo(path: &str) -> Result<(String, String), UrlError> {
    let mut parts = path.splitn(3, '/');
    let owner = parts.next().unwrap_or_default();
    let repo = parts.next().unwrap_or_default();

    if owner.is_empty() || repo.is_empty() {
        return Err(UrlError::InvalidFormat(format!(
            "expected owner/repo in path {:?}",
            path
        )));
    }
    Ok((owner.to_string(), repo.to_string()))
}

/// Maps a host to a provider identifier, or `""` when nothing matches.
///
/// Exact hosts win. Otherwise any host containing `gitlab` is treated as
/// GitLab and any containing `gitea` or `forgejo` as Gitea, which also
/// catches unrelated hosts such as `my-gitlab-mirror.internal`.
pub fn provider_from_host(host: &str) -> &'static str {
    let host = host.to_ascii_lowercase();

    if let Some((_, provider)) = PROVIDER_HOSTS.iter().find(|(h, _)| *h == host) {
        return *provider;
    }
    if host.contains("gitlab") {
        return "gitlab";
    }
    if host.contains("gitea") || host.contains("forgejo") {
        return "gitea";
    }
    ""
}

fn ssh_pattern() -> &'static Regex {
    static SSH: OnceLock<Regex> = OnceLock::new();
    SSH.get_or_init(|| Regex::new(r"^git@[^:]+:.+$").expect("ssh regex is valid"))
}

/// Admission check used before a URL is stored.
///
/// Lighter than [`parse_repo_url`]: HTTPS is accepted on prefix alone and SSH
/// only needs the `git@host:path` shape. Plain `http://` is refused.
pub fn is_valid_repo_url(raw: &str) -> bool {
    raw.starts_with("https://") || ssh_pattern().is_match(raw)
}
