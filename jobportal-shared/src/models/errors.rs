use serde::Deserialize;

/// Error envelope served by the backend on failed requests.
///
/// Only ever read client-side: `message` is what 400-class failures surface
/// verbatim, `details` rides along when the backend includes it.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test deserialization of the duplicate-application rejection body
    #[test]
    fn reads_the_duplicate_application_rejection_body() {
        let json = r#"{"message":"Already applied","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Already applied");
        assert_eq!(error.details, None);
    }

    /// Test deserialization when the body omits the details field entirely
    #[test]
    fn tolerates_a_body_without_the_details_field() {
        let json = r#"{"message":"Already applied"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        // The backend sometimes omits null fields; the envelope must accept that.
        assert_eq!(error.message, "Already applied");
        assert_eq!(error.details, None);
    }

    #[test]
    fn carries_details_when_served() {
        let json = r#"{"message":"Validation failed","details":"email is required"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.details.as_deref(), Some("email is required"));
    }
}
