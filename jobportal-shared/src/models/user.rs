use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile as served by `GET /users/profile` and echoed back on update.
///
/// The update endpoint expects the full object, so fields this client never
/// edits are preserved: the known optional ones explicitly, anything else
/// through the flattened `extra` map. The server's response to a `PUT` is
/// authoritative and replaces local state wholesale.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier, treated as opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Full name, editable in the profile dialog.
    #[serde(default)]
    pub name: String,

    /// Email address. Displayed, never edited here.
    #[serde(default)]
    pub email: String,

    /// Calendar date, normalized to `YYYY-MM-DD` for display and editing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Contact number, when the profile carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Highest education, when the profile carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    /// Listed skills, when the profile carries any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Backend fields this client does not model, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
