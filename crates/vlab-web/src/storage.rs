use vlab::SessionStore;
use web_sys::Storage;

fn storage() -> Option<Storage> {
    crate::dom::window().local_storage().ok().flatten()
}

/// `localStorage` behind a [`vlab::Session`]. Writes are dropped silently
/// when storage is unavailable (private mode, quota).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(s) = storage() {
            s.set_item(key, value).ok();
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(s) = storage() {
            s.remove_item(key).ok();
        }
    }
}
