// ============================================================================
// API ERROR - Clasificación única de errores HTTP
// ============================================================================
// El cuerpo de error se decodifica una sola vez aquí; ningún call site vuelve
// a inspeccionar si `detail` era string, lista u objeto.
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::utils::{GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};

/// One entry of a per-field validation list (`{"loc": [...], "msg": "..."}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldIssue {
    #[serde(default)]
    pub loc: Vec<Value>,
    pub msg: String,
}

impl FieldIssue {
    /// Last segment of `loc`, which names the offending field
    pub fn field(&self) -> Option<String> {
        self.loc.last().map(|segment| match segment {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerDetail {
    Message(String),
    FieldList(Vec<FieldIssue>),
    Structured(Value),
    Empty,
}

impl ServerDetail {
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return ServerDetail::Empty;
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => return ServerDetail::Message(trimmed.to_string()),
        };

        match value {
            Value::Object(mut map) => match map.remove("detail") {
                Some(detail) => Self::from_detail(detail),
                None if map.is_empty() => ServerDetail::Empty,
                None => ServerDetail::Structured(Value::Object(map)),
            },
            Value::String(s) => ServerDetail::Message(s),
            other => ServerDetail::Structured(other),
        }
    }

    fn from_detail(detail: Value) -> Self {
        match detail {
            Value::String(s) if s.is_empty() => ServerDetail::Empty,
            Value::String(s) => ServerDetail::Message(s),
            Value::Null => ServerDetail::Empty,
            Value::Array(items) => {
                let parsed: Result<Vec<FieldIssue>, _> = items
                    .iter()
                    .cloned()
                    .map(serde_json::from_value)
                    .collect();
                match parsed {
                    Ok(issues) => ServerDetail::FieldList(issues),
                    Err(_) => ServerDetail::Structured(Value::Array(items)),
                }
            }
            other => ServerDetail::Structured(other),
        }
    }

    /// Human readable text, if the server gave any
    pub fn message(&self) -> Option<String> {
        match self {
            ServerDetail::Message(s) => Some(s.clone()),
            ServerDetail::FieldList(issues) if !issues.is_empty() => Some(
                issues
                    .iter()
                    .map(|i| i.msg.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            ServerDetail::FieldList(_) => None,
            ServerDetail::Structured(value) => Some(value.to_string()),
            ServerDetail::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication rejected")]
    Unauthorized(ServerDetail),
    #[error("Validation rejected (HTTP {status})")]
    Validation { status: u16, detail: ServerDetail },
    #[error("Conflict")]
    Conflict(ServerDetail),
    #[error("Not found")]
    NotFound(ServerDetail),
    #[error("HTTP {status}")]
    Server { status: u16, detail: ServerDetail },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("No changes detected")]
    EmptyUpdate,
}

impl ApiError {
    /// Classifies a non-success response
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = ServerDetail::from_body(body);
        match status {
            401 => ApiError::Unauthorized(detail),
            404 => ApiError::NotFound(detail),
            422 => ApiError::Validation { status, detail },
            400 => match detail {
                ServerDetail::FieldList(_) | ServerDetail::Structured(_) => {
                    ApiError::Validation { status, detail }
                }
                other => ApiError::Conflict(other),
            },
            _ => ApiError::Server { status, detail },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(400),
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::EmptyUpdate => None,
        }
    }

    pub fn detail(&self) -> Option<&ServerDetail> {
        match self {
            ApiError::Unauthorized(d) | ApiError::Conflict(d) | ApiError::NotFound(d) => Some(d),
            ApiError::Validation { detail, .. } | ApiError::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Message for a form-level banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::EmptyUpdate => self.to_string(),
            ApiError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
            ApiError::NotFound(detail) => detail.message().unwrap_or_else(|| "Not found.".to_string()),
            other => other
                .detail()
                .and_then(ServerDetail::message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Errores por campo para los formularios, más un mensaje general opcional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub fields: BTreeMap<String, String>,
    pub general: Option<String>,
}

impl FieldErrors {
    /// Maps an API failure onto form fields.
    ///
    /// Field-list validation goes to the field named by each issue, a
    /// conflict goes to `conflict_field`, anything else becomes the general
    /// message.
    pub fn from_api_error(error: &ApiError, conflict_field: &str) -> Self {
        let mut errors = FieldErrors::default();

        match error {
            ApiError::Validation { detail: ServerDetail::FieldList(issues), .. } => {
                for issue in issues {
                    match issue.field() {
                        Some(field) => {
                            errors.fields.entry(field).or_insert_with(|| issue.msg.clone());
                        }
                        None => errors.general = Some(issue.msg.clone()),
                    }
                }
                if errors.fields.is_empty() && errors.general.is_none() {
                    errors.general = Some(error.user_message());
                }
            }
            ApiError::Conflict(_) => {
                errors.fields.insert(conflict_field.to_string(), error.user_message());
            }
            other => errors.general = Some(other.user_message()),
        }

        errors
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.fields.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_becomes_message() {
        let err = ApiError::from_status(400, r#"{"detail":"Employee ID already exists"}"#);
        assert_eq!(
            err,
            ApiError::Conflict(ServerDetail::Message("Employee ID already exists".to_string()))
        );
        assert_eq!(err.user_message(), "Employee ID already exists");
    }

    #[test]
    fn validation_list_maps_to_fields() {
        let body = r#"{"detail":[
            {"loc":["body","salary"],"msg":"value is not a valid float","type":"type_error.float"},
            {"loc":["body","joining_date"],"msg":"field required","type":"value_error.missing"}
        ]}"#;
        let err = ApiError::from_status(422, body);

        let errors = FieldErrors::from_api_error(&err, "employee_id");
        assert_eq!(errors.get("salary"), Some("value is not a valid float"));
        assert_eq!(errors.get("joining_date"), Some("field required"));
        assert!(errors.general.is_none());
        assert_eq!(err.user_message(), "value is not a valid float, field required");
    }

    #[test]
    fn conflict_maps_to_requested_field() {
        let err = ApiError::from_status(400, r#"{"detail":"Employee ID already exists"}"#);
        let errors = FieldErrors::from_api_error(&err, "employee_id");
        assert_eq!(errors.get("employee_id"), Some("Employee ID already exists"));
    }

    #[test]
    fn structured_400_is_validation() {
        let err = ApiError::from_status(400, r#"{"detail":{"code":"bad"}}"#);
        assert!(matches!(err, ApiError::Validation { status: 400, detail: ServerDetail::Structured(_) }));
    }

    #[test]
    fn non_json_body_is_kept_as_message() {
        let err = ApiError::from_status(502, "Bad Gateway");
        assert_eq!(
            err,
            ApiError::Server { status: 502, detail: ServerDetail::Message("Bad Gateway".to_string()) }
        );
    }

    #[test]
    fn empty_detail_falls_back_to_generic_message() {
        let err = ApiError::from_status(500, "");
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let errors = FieldErrors::from_api_error(&err, "employee_id");
        assert_eq!(errors.general.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn network_errors_use_connectivity_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
