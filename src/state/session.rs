//! Session Store
//!
//! Holds the authenticated user's identity and credential token, persisted
//! across reloads in local storage. The token is never validated locally;
//! an expired token simply surfaces as a failed API call later.

use leptos::*;

/// Local storage key for the credential token
pub const TOKEN_KEY: &str = "token";
/// Local storage key for the serialized user profile
pub const USER_KEY: &str = "user";

/// Authenticated user profile as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// An authenticated session: user profile plus bearer token
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Reactive session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: RwSignal<Option<Session>>,
}

impl SessionState {
    /// The current session, if any
    pub fn current(&self) -> Option<Session> {
        self.session.get()
    }

    /// Persist a session and make it current
    pub fn login(&self, user: User, token: String) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, &token);
            if let Ok(json) = serde_json::to_string(&user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
        self.session.set(Some(Session { user, token }));
    }

    /// Clear persisted state and the current session
    pub fn logout(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        self.session.set(None);
    }
}

/// Provide session state to the component tree, restoring any persisted
/// session first
pub fn provide_session_state() {
    let state = SessionState {
        session: create_rw_signal(restore()),
    };
    provide_context(state);
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reconstruct a session from the two persisted values. Either value missing,
/// an empty token, or unparseable user JSON yields no session.
pub fn parse_stored(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some(Session { user, token })
}

/// Attempt to restore a session from local storage. Malformed state is
/// treated as "no session" and both keys are cleared.
fn restore() -> Option<Session> {
    let storage = storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_json = storage.get_item(USER_KEY).ok().flatten();

    let session = parse_stored(token, user_json);
    if session.is_none() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> String {
        r#"{"id":7,"username":"ash","role":"user"}"#.to_string()
    }

    #[test]
    fn test_parse_stored_well_formed() {
        let session = parse_stored(Some("tok-123".into()), Some(user_json())).unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.username, "ash");
        assert!(!session.user.is_admin());
    }

    #[test]
    fn test_parse_stored_is_idempotent() {
        let a = parse_stored(Some("tok-123".into()), Some(user_json()));
        let b = parse_stored(Some("tok-123".into()), Some(user_json()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_stored_rejects_corrupt_user() {
        assert!(parse_stored(Some("tok-123".into()), Some("{not json".into())).is_none());
        assert!(parse_stored(Some("tok-123".into()), Some(r#"{"id":1}"#.into())).is_none());
    }

    #[test]
    fn test_parse_stored_rejects_missing_values() {
        assert!(parse_stored(None, Some(user_json())).is_none());
        assert!(parse_stored(Some("tok-123".into()), None).is_none());
        assert!(parse_stored(Some(String::new()), Some(user_json())).is_none());
    }

    #[test]
    fn test_admin_role() {
        let json = r#"{"id":1,"username":"krit","role":"admin"}"#;
        let session = parse_stored(Some("t".into()), Some(json.into())).unwrap();
        assert!(session.user.is_admin());
    }
}
