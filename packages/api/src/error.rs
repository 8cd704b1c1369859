//! Error type shared by every backend call.

use serde_json::Value;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The backend-provided message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Human-readable message: the backend detail, or `fallback`.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Pull the message out of an error body of the form `{"detail": ...}`.
///
/// `detail` is either a string or, for validation errors, a list of objects
/// carrying a `msg` field; those messages are joined with `"; "`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid email or password"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.detail_or("Login failed"), "Invalid email or password");
    }

    #[test]
    fn test_extract_validation_detail() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"too short"}]}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("field required; too short"));
    }

    #[test]
    fn test_fallback_when_no_detail() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.detail_or("Login failed"), "Login failed");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.detail_or("Registration failed"), "Registration failed");
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_status(404, r#"{"detail":"Idea not found"}"#);
        assert_eq!(err.to_string(), "request failed (404): Idea not found");
    }
}
