//! Local storage keys and accessors.
//!
//! The auth entry is a mount-time hint only; the server-side cookie is the
//! authority. Theme entries are cached under independent keys, so a partial
//! write leaves the others untouched.

use gloo_storage::{LocalStorage, Storage};

pub const AUTH_HINT_KEY: &str = "shopkeep.auth";
pub const THEME_PRIMARY_KEY: &str = "shopkeep.theme.primary";
pub const THEME_FONT_SIZE_KEY: &str = "shopkeep.theme.font_size";
pub const THEME_FONT_FAMILY_KEY: &str = "shopkeep.theme.font_family";

pub fn auth_hint() -> bool {
    LocalStorage::get::<bool>(AUTH_HINT_KEY).unwrap_or(false)
}

pub fn set_auth_hint(value: bool) {
    let _ = LocalStorage::set(AUTH_HINT_KEY, value);
}

pub fn clear_auth_hint() {
    LocalStorage::delete(AUTH_HINT_KEY);
}

pub fn cache_theme_entry(key: &str, value: &str) {
    let _ = LocalStorage::set(key, value);
}

pub fn cached_theme_entry(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key).ok()
}
