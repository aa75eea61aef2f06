// Rust structs mirroring the panel's session types
use serde::{Deserialize, Serialize};

/// The whole authentication record the panel persists across restarts.
///
/// `kubeconfig` holds the raw document handed out at login; the bearer
/// token is derived from it on demand rather than stored separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub kubeconfig: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            user: None,
            kubeconfig: String::new(),
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A targeted single-field update of the session record, as opposed to
/// replacing the whole record with `set_session`.
#[derive(Debug, Clone)]
pub enum SessionProp {
    User(Option<UserInfo>),
    Kubeconfig(String),
    Locale(String),
}
