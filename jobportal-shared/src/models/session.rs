use serde::{Deserialize, Serialize};

/// The credential and display name the client holds for the signed-in user.
///
/// Created on a successful login or registration, cleared on logout. The
/// token is an opaque string; the client never inspects or validates it.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, absent when signed out.
    pub token: Option<String>,

    /// Name shown in the header greeting, when known.
    pub display_name: Option<String>,
}

impl Session {
    /// Build a session from an optional token and display name.
    #[must_use]
    pub fn new(token: Option<String>, display_name: Option<String>) -> Self {
        Self {
            token,
            display_name,
        }
    }

    /// Token presence is the only authentication signal the client has.
    #[must_use]
    pub const fn authenticated(&self) -> bool {
        self.token.is_some()
    }
}
