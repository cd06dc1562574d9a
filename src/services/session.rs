// ============================================================================
// SESSION STORE - single read/write boundary over localStorage
// ============================================================================
// The token and user record are persisted together on login and removed
// together on logout. Every read re-parses storage; there is no in-memory
// copy to drift out of sync.
// ============================================================================

use crate::models::{Role, User};
use crate::utils::{load_raw, remove_from_storage, save_raw, save_to_storage, TOKEN_KEY, USER_KEY};

#[derive(Clone, Default, PartialEq, Debug)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Read the current session. Absent keys yield an empty session; a stored
/// user record that no longer parses is treated the same way (fail closed).
pub fn get() -> Session {
    let token = load_raw(TOKEN_KEY);
    let user = load_raw(USER_KEY).and_then(|raw| parse_user(&raw));
    Session { token, user }
}

pub fn set(token: &str, user: &User) {
    if save_raw(TOKEN_KEY, token).is_err() || save_to_storage(USER_KEY, user).is_err() {
        log::error!("💾 Failed to persist session to localStorage");
    }
}

pub fn clear() {
    remove_from_storage(TOKEN_KEY).ok();
    remove_from_storage(USER_KEY).ok();
}

fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("⚠️ Stored user record is corrupt, treating as logged out: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_accepts_login_payload_user() {
        let user = parse_user(r#"{"username":"alice","role":"staff"}"#).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::Staff);
    }

    #[test]
    fn parse_user_fails_closed_on_corrupt_record() {
        assert!(parse_user("{not json").is_none());
        assert!(parse_user(r#"{"username":"bob"}"#).is_none());
        assert!(parse_user(r#"{"username":"bob","role":"superuser"}"#).is_none());
    }

    #[test]
    fn session_is_authenticated_only_with_both_halves() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Staff,
        };
        let full = Session {
            token: Some("T1".to_string()),
            user: Some(user.clone()),
        };
        let token_only = Session {
            token: Some("T1".to_string()),
            user: None,
        };
        let user_only = Session {
            token: None,
            user: Some(user),
        };
        assert!(full.is_authenticated());
        assert_eq!(full.role(), Some(Role::Staff));
        assert!(!token_only.is_authenticated());
        assert!(!user_only.is_authenticated());
        assert!(!Session::default().is_authenticated());
    }
}
