//! Local Storage Helpers
//!
//! The dashboard remembers its last-active section under a single
//! localStorage key: read once at startup, written on every change. A
//! missing value is not an error; the caller falls back to its default.

/// Storage key for the last-active dashboard section
pub const ACTIVE_SECTION_KEY: &str = "mindspace_active_section";

/// Read the last-active dashboard section id, if one was stored
pub fn load_active_section() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(ACTIVE_SECTION_KEY).ok()?
}

/// Persist the active dashboard section id
pub fn store_active_section(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(ACTIVE_SECTION_KEY, id);
        }
    }
}
