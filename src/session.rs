use crate::models::session::{Session, SessionProp};
use crate::storage::KvStore;

/// Fixed storage key for the whole session record.
pub const SESSION_KEY: &str = "session";

// ── store ─────────────────────────────────────────────────────────────────────

/// Authentication state with load-on-init, save-on-mutate persistence.
///
/// Constructed once at process start over a [`KvStore`] and passed by
/// reference to consumers; there is no ambient global. Every mutation
/// persists the whole record so state survives a restart.
pub struct SessionStore<S: KvStore> {
    store: S,
    session: Session,
}

impl<S: KvStore> SessionStore<S> {
    /// Loads any persisted record, falling back to a fresh default session.
    /// An unreadable record is discarded rather than crashing startup.
    pub fn open(store: S) -> Self {
        let session = store
            .get(SESSION_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("session: discarding unreadable persisted record: {e}");
                    None
                }
            })
            .unwrap_or_default();

        SessionStore { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replaces the whole record.
    pub fn set_session(&mut self, session: Session) -> Result<(), String> {
        self.session = session;
        self.persist()
    }

    /// Updates exactly one named field, leaving all others untouched.
    pub fn set_prop(&mut self, prop: SessionProp) -> Result<(), String> {
        match prop {
            SessionProp::User(user) => self.session.user = user,
            SessionProp::Kubeconfig(kubeconfig) => self.session.kubeconfig = kubeconfig,
            SessionProp::Locale(locale) => self.session.locale = locale,
        }
        self.persist()
    }

    /// Logout: resets to the default record and persists the reset.
    pub fn clear(&mut self) -> Result<(), String> {
        self.session = Session::default();
        self.persist()
    }

    pub fn is_user_login(&self) -> bool {
        self.session.user.as_ref().is_some_and(|u| !u.id.is_empty())
    }

    /// Derives the bearer token from the embedded kubeconfig. The document
    /// is parsed on every call, never cached; callers that need it often
    /// may cache the result themselves.
    pub fn bearer_token(&self) -> Result<String, String> {
        derive_token(&self.session)
    }

    fn persist(&self) -> Result<(), String> {
        let raw = serde_json::to_string(&self.session)
            .map_err(|e| format!("Failed to serialize session: {e}"))?;
        self.store.set(SESSION_KEY, &raw)
    }
}

// ── token derivation ──────────────────────────────────────────────────────────

/// Extracts `users[0].user.token` from the session's kubeconfig document.
///
/// An empty kubeconfig means no session is established and yields an empty
/// token without a parse attempt. A malformed document or a missing token
/// field fails loud with a descriptive error instead of silently returning
/// an empty token.
pub fn derive_token(session: &Session) -> Result<String, String> {
    if session.kubeconfig.is_empty() {
        return Ok(String::new());
    }

    let doc: serde_yaml::Value = serde_yaml::from_str(&session.kubeconfig)
        .map_err(|e| format!("Failed to parse kubeconfig: {e}"))?;

    doc["users"][0]["user"]["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "kubeconfig carries no user token".to_string())
}
