use super::request::{ProjectFields, RequestKind};
use super::ValidationError;
use crate::repo_url::is_valid_repo_url;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError>;
}

/// A project needs something to identify it: a name, a repository, or both.
pub struct NameOrRepoUrlRule;

impl ValidationRule for NameOrRepoUrlRule {
    fn name(&self) -> &'static str {
        "NameOrRepoUrl"
    }

    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        if fields.kind == RequestKind::Create && fields.name.is_none() && fields.repo_url.is_none() {
            return Err(ValidationError::new(
                "name",
                "either name or repo_url is required",
            ));
        }
        Ok(())
    }
}

pub struct NameRule;

impl ValidationRule for NameRule {
    fn name(&self) -> &'static str {
        "Name"
    }

    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        let Some(name) = fields.name else {
            return Ok(());
        };

        if name.is_empty() {
            return Err(ValidationError::new("name", "name cannot be empty"));
        }
        let length = name.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!(
                    "name must be at most {} characters, got {}",
                    MAX_NAME_LENGTH, length
                ),
            ));
        }
        if let Some(c) = name.chars().find(|c| c.is_control()) {
            return Err(ValidationError::new(
                "name",
                format!("name contains control character {:?}", c),
            ));
        }
        Ok(())
    }
}

/// Membership check against the providers the backend registry offers.
/// An empty allow-list means no restriction is configured.
pub struct ProviderRule {
    allowed: Vec<String>,
}

impl ProviderRule {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }
}

impl ValidationRule for ProviderRule {
    fn name(&self) -> &'static str {
        "Provider"
    }

    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        let provider = match fields.provider {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(()),
        };
        if self.allowed.is_empty() || self.allowed.iter().any(|a| a == provider) {
            return Ok(());
        }
        Err(ValidationError::new(
            "provider",
            format!(
                "unknown provider {:?}, available: {}",
                provider,
                self.allowed.join(", ")
            ),
        ))
    }
}

pub struct RepoUrlRule;

impl ValidationRule for RepoUrlRule {
    fn name(&self) -> &'static str {
        "RepoUrl"
    }

    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        match fields.repo_url {
            Some(url) if !url.is_empty() && !is_valid_repo_url(url) => Err(ValidationError::new(
                "repo_url",
                format!(
                    "{:?} must be an https:// URL or git@host:path SSH remote",
                    url
                ),
            )),
            _ => Ok(()),
        }
    }
}

pub struct DescriptionRule;

impl ValidationRule for DescriptionRule {
    fn name(&self) -> &'static str {
        "Description"
    }

    fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        let length = fields.description.map(|d| d.chars().count()).unwrap_or(0);
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::new(
                "description",
                format!(
                    "description must be at most {} characters, got {}",
                    MAX_DESCRIPTION_LENGTH, length
                ),
            ));
        }
        Ok(())
    }
}
