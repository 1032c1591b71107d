use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: Admin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Admin {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// What survives a reload: the bearer token and the signed-in admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub admin: Admin,
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Self {
            token: r.token,
            admin: r.admin,
        }
    }
}

/// Persistence for the current session.
///
/// Written only by login and logout (and by a 401, which logs out).
pub trait SessionStore {
    fn get_session(&self) -> Option<Session>;
    fn set_session(&self, session: &Session);
    fn clear_session(&self);
}

/// Process-local store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self) -> Option<Session> {
        self.inner.lock().ok().and_then(|s| s.clone())
    }

    fn set_session(&self, session: &Session) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear_session(&self) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "jwt".into(),
            admin: Admin {
                id: "a1".into(),
                username: "owner".into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::default();
        assert_eq!(store.get_session(), None);
        store.set_session(&session());
        assert_eq!(store.get_session().map(|s| s.token), Some("jwt".into()));
        store.clear_session();
        assert_eq!(store.get_session(), None);
    }

    #[test]
    fn decodes_login_response() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"token":"abc","admin":{"_id":"a1","username":"owner","name":"Dairy Owner"}}"#,
        )
        .unwrap();
        let s = Session::from(r);
        assert_eq!(s.admin.display_name(), "Dairy Owner");
    }

    #[test]
    fn blank_credentials_are_incomplete() {
        let req = LoginRequest {
            username: " ".into(),
            password: "x".into(),
        };
        assert!(!req.is_complete());
    }
}
