use crate::config::FrontendConfig;
use crate::session::SessionStore;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AppliedOpportunity, ApplyResponse, AuthResponse, ErrorResponse, LoginRequest, Opportunity,
    RegisterRequest, UserProfile,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<PortalClient> = OnceCell::new();
}

/// How an API call failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` carries the
    /// body's error envelope when one was parseable, the raw body text
    /// otherwise.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
    },

    /// The request never produced a response.
    #[error("unable to reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// An application for the same opportunity has not resolved yet; no
    /// request was issued.
    #[error("An application for this opportunity is already in progress")]
    AlreadyInFlight,
}

impl ApiError {
    /// True for 400-class responses, whose messages are shown verbatim.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if status.is_client_error())
    }

    /// Server-provided message where available, `fallback` otherwise.
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Lightweight API client for the job portal backend.
///
/// Constructed once with a fixed base address. Every request passes through
/// the authorization hook, which attaches the session token as a bearer
/// credential when one is held; requests go out unauthenticated otherwise.
/// Calls are fire-once: no retry, no explicit timeout.
#[derive(Clone, Debug)]
pub struct PortalClient {
    base_url: String,
    client: Client,
    session: SessionStore,
    pending_applications: Arc<Mutex<HashSet<String>>>,
}

impl PortalClient {
    /// Create a new API client with the provided base URL and session store.
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
            pending_applications: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Process-wide client bound to browser session storage.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::default();
                Self::new(config.api_base_url(), SessionStore::browser())
            })
            .clone()
        })
    }

    /// The session store this client reads its credential from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request hook: attach the bearer credential when one is held.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.client.request(method, self.api_url(path)))
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        Self::send_json(self.request(Method::POST, "auth/login").json(payload)).await
    }

    /// Create an account. The backend signs the new user in directly.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        Self::send_json(self.request(Method::POST, "auth/register").json(payload)).await
    }

    /// Fetch every posting. No credential required.
    pub async fn get_opportunities(&self) -> Result<Vec<Opportunity>, ApiError> {
        Self::send_json(self.request(Method::GET, "opportunities")).await
    }

    /// Apply to a posting.
    ///
    /// A second call for the same id while the first is unresolved returns
    /// [`ApiError::AlreadyInFlight`] without touching the network. There is
    /// no idempotency key; a duplicate that does reach the server is the
    /// server's to reject.
    pub async fn apply_to_opportunity(
        &self,
        opportunity_id: &str,
    ) -> Result<ApplyResponse, ApiError> {
        if !self.begin_apply(opportunity_id) {
            return Err(ApiError::AlreadyInFlight);
        }
        let result = Self::send_json(
            self.request(
                Method::POST,
                &format!("opportunities/{opportunity_id}/apply"),
            ),
        )
        .await;
        self.finish_apply(opportunity_id);
        result
    }

    /// Retrieve the signed-in user's profile.
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        Self::send_json(self.request(Method::GET, "users/profile")).await
    }

    /// Replace the profile. The response is the authoritative new state.
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        Self::send_json(self.request(Method::PUT, "users/profile").json(profile)).await
    }

    /// List postings the signed-in user already applied to.
    pub async fn get_applied_opportunities(&self) -> Result<Vec<AppliedOpportunity>, ApiError> {
        Self::send_json(self.request(Method::GET, "users/applied-opportunities")).await
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Map a non-2xx response to [`ApiError::Status`].
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: extract_error_message(status, &body),
        })
    }

    fn begin_apply(&self, opportunity_id: &str) -> bool {
        self.pending_applications
            .lock()
            .map(|mut pending| pending.insert(opportunity_id.to_string()))
            .unwrap_or(true)
    }

    fn finish_apply(&self, opportunity_id: &str) {
        if let Ok(mut pending) = self.pending_applications.lock() {
            pending.remove(opportunity_id);
        }
    }
}

/// Pull a display message out of an error response body: the envelope's
/// `message` field when the body parses, the raw text otherwise, the
/// canonical status reason as a last resort.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryBackend;
    use reqwest::header::AUTHORIZATION;

    fn client_with_store() -> PortalClient {
        let store = SessionStore::new(Arc::new(MemoryBackend::default()));
        PortalClient::new("http://localhost:5000/api/", store)
    }

    /// Paths join against the base without doubled or missing slashes.
    #[test]
    fn api_url_joins_cleanly() {
        let client = client_with_store();
        assert_eq!(
            client.api_url("opportunities"),
            "http://localhost:5000/api/opportunities"
        );
        assert_eq!(
            client.api_url("/users/profile"),
            "http://localhost:5000/api/users/profile"
        );
    }

    /// A held token rides along as a bearer credential on every request.
    #[test]
    fn authorization_hook_attaches_the_stored_token() {
        let client = client_with_store();
        client.session().set_token(Some("opaque-credential"));

        let request = client
            .request(Method::GET, "users/profile")
            .build()
            .unwrap();
        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer opaque-credential");
    }

    /// Without a token the request goes out unauthenticated.
    #[test]
    fn requests_without_a_token_carry_no_authorization_header() {
        let client = client_with_store();
        let request = client
            .request(Method::GET, "opportunities")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    /// The duplicate-apply guard admits one in-flight request per id.
    #[test]
    fn second_apply_for_the_same_id_is_refused_until_the_first_resolves() {
        let client = client_with_store();
        assert!(client.begin_apply("66b2f0"));
        assert!(!client.begin_apply("66b2f0"));
        // A different posting is unaffected.
        assert!(client.begin_apply("66b2f1"));
        client.finish_apply("66b2f0");
        assert!(client.begin_apply("66b2f0"));
    }

    /// The envelope's message is surfaced verbatim for 400-class errors.
    #[test]
    fn error_message_prefers_the_envelope() {
        let message =
            extract_error_message(StatusCode::BAD_REQUEST, r#"{"message":"Already applied"}"#);
        assert_eq!(message, "Already applied");
    }

    #[test]
    fn error_message_falls_back_to_raw_body_text() {
        let message = extract_error_message(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert_eq!(message, "upstream unavailable");
    }

    #[test]
    fn error_message_falls_back_to_the_status_reason() {
        let message = extract_error_message(StatusCode::NOT_FOUND, "");
        assert_eq!(message, "Not Found");
    }

    #[test]
    fn status_errors_classify_by_class() {
        let duplicate = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            message: "Already applied".to_string(),
        };
        let outage = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert!(duplicate.is_client_error());
        assert!(!outage.is_client_error());
    }

    #[test]
    fn surface_message_uses_the_server_text_when_present() {
        let error = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(
            error.surface_message("An error occurred during login"),
            "Invalid credentials"
        );
    }

    #[test]
    fn surface_message_falls_back_for_non_status_errors() {
        assert_eq!(
            ApiError::AlreadyInFlight.surface_message("An error occurred during login"),
            "An error occurred during login"
        );
    }

    /// Display of a status error is the message alone, ready for the UI.
    #[test]
    fn status_error_displays_its_message() {
        let error = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            message: "Already applied".to_string(),
        };
        assert_eq!(error.to_string(), "Already applied");
    }
}
