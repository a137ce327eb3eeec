use serde::{Deserialize, Serialize};

/// Payload for registering a project.
///
/// Empty strings mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRequest {
    pub name: String,
    pub description: String,
    pub repo_url: String,
    pub provider: String,
    pub config: Option<serde_json::Value>,
}

/// Partial update of a project.
///
/// `None` leaves a field unchanged; `Some("")` clears it. Clearing the name
/// is not allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub provider: Option<String>,
    pub config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Create,
    Update,
}

/// Borrowed view over either request shape that the rules inspect.
///
/// A field is `Some` when the caller supplied it: non-empty for creates,
/// present for updates.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub kind: RequestKind,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub repo_url: Option<&'a str>,
    pub provider: Option<&'a str>,
}

fn supplied(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

impl<'a> From<&'a CreateRequest> for ProjectFields<'a> {
    fn from(req: &'a CreateRequest) -> Self {
        Self {
            kind: RequestKind::Create,
            name: supplied(&req.name),
            description: supplied(&req.description),
            repo_url: supplied(&req.repo_url),
            provider: supplied(&req.provider),
        }
    }
}

impl<'a> From<&'a UpdateRequest> for ProjectFields<'a> {
    fn from(req: &'a UpdateRequest) -> Self {
        Self {
            kind: RequestKind::Update,
            name: req.name.as_deref(),
            description: req.description.as_deref(),
            repo_url: req.repo_url.as_deref(),
            provider: req.provider.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_view_drops_empty_fields() {
        let req = CreateRequest {
            name: "api".to_string(),
            ..Default::default()
        };
        let fields = ProjectFields::from(&req);

        assert_eq!(fields.kind, RequestKind::Create);
        assert_eq!(fields.name, Some("api"));
        assert_eq!(fields.repo_url, None);
        assert_eq!(fields.provider, None);
    }

    #[test]
    fn test_update_view_keeps_explicit_empty() {
        let req = UpdateRequest {
            description: Some(String::new()),
            ..Default::default()
        };
        let fields = ProjectFields::from(&req);

        assert_eq!(fields.kind, RequestKind::Update);
        assert_eq!(fields.description, Some(""));
        assert_eq!(fields.name, None);
    }

    #[test]
    fn test_update_request_deserializes_missing_as_none() {
        let req: UpdateRequest =
            serde_json::from_str(r#"{"name": "renamed", "repo_url": ""}"#).unwrap();

        assert_eq!(req.name.as_deref(), Some("renamed"));
        assert_eq!(req.repo_url.as_deref(), Some(""));
        assert!(req.description.is_none());
        assert!(req.config.is_none());
    }

    #[test]
    fn test_create_request_deserializes_config() {
        let req: CreateRequest = serde_json::from_str(
            r#"{"repo_url": "https://github.com/a/b", "config": {"mode": "coder"}}"#,
        )
        .unwrap();

        assert!(req.name.is_empty());
        assert_eq!(req.config.unwrap()["mode"], "coder");
    }
}
