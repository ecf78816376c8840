use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Payload for `POST /auth/register`.
///
/// The confirmation field is checked locally and never leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's full name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Token envelope returned by both auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer credential for subsequent authenticated requests.
    pub token: String,

    /// Display name, when the backend includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Confirmation returned by `POST /opportunities/{id}/apply`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyResponse {
    /// Server-side confirmation text, when provided.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_without_name() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(response.token, "abc123");
        assert_eq!(response.name, None);
    }

    #[test]
    fn auth_response_with_name() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token":"abc123","name":"Priya"}"#).unwrap();
        assert_eq!(response.name.as_deref(), Some("Priya"));
    }

    #[test]
    fn register_request_serializes_without_confirmation() {
        let request = RegisterRequest {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
        assert!(!json.contains("confirm"));
    }

    #[test]
    fn apply_response_tolerates_empty_body_object() {
        let response: ApplyResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.message, None);
    }
}
