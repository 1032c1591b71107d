use crate::shared::config::AppConfig;
use contracts::system::auth::{Session, SessionStore};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session persisted as JSON under [`AppConfig::SESSION_STORAGE_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn get_session(&self) -> Option<Session> {
        let raw = get_local_storage()?
            .get_item(AppConfig::SESSION_STORAGE_KEY)
            .ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable session: {}", e);
                None
            }
        }
    }

    fn set_session(&self, session: &Session) {
        let Some(storage) = get_local_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(json) => {
                let _ = storage.set_item(AppConfig::SESSION_STORAGE_KEY, &json);
            }
            Err(e) => log::error!("failed to persist session: {}", e),
        }
    }

    fn clear_session(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(AppConfig::SESSION_STORAGE_KEY);
        }
    }
}

/// Reads a JSON value from localStorage.
pub fn load_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn save_json<T: serde::Serialize>(key: &str, value: &T) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(value)) {
        let _ = storage.set_item(key, &json);
    }
}
