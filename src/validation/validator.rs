use super::request::{CreateRequest, ProjectFields, UpdateRequest};
use super::rules::{
    DescriptionRule, NameOrRepoUrlRule, NameRule, ProviderRule, RepoUrlRule, ValidationRule,
};
use super::ValidationError;
use tracing::debug;

/// Runs rules in order and stops at the first violation.
pub struct RequestValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RequestValidator {
    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    pub fn for_create<S: AsRef<str>>(available_providers: &[S]) -> Self {
        let allowed = available_providers
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        Self::with_rules(vec![
            Box::new(NameOrRepoUrlRule),
            Box::new(NameRule),
            Box::new(ProviderRule::new(allowed)),
            Box::new(RepoUrlRule),
            Box::new(DescriptionRule),
        ])
    }

    /// Updates carry no allow-list, so provider membership is not checked.
    pub fn for_update() -> Self {
        Self::with_rules(vec![
            Box::new(NameRule),
            Box::new(RepoUrlRule),
            Box::new(DescriptionRule),
        ])
    }

    pub fn validate(&self, fields: &ProjectFields<'_>) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.validate(fields) {
                debug!(rule = rule.name(), field = err.field, reason = %err.reason, "Request rejected");
                return Err(err);
            }
        }
        Ok(())
    }
}

pub fn validate_create_request<S: AsRef<str>>(
    req: &CreateRequest,
    available_providers: &[S],
) -> Result<(), ValidationError> {
    RequestValidator::for_create(available_providers).validate(&ProjectFields::from(req))
}

pub fn validate_update_request(req: &UpdateRequest) -> Result<(), ValidationError> {
    RequestValidator::for_update().validate(&ProjectFields::from(req))
}
