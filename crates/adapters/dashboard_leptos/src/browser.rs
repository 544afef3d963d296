//! Thin wrappers over the browser APIs the dashboard touches.
//!
//! Every helper degrades to a no-op (or a neutral value) when the API is
//! missing, so components never deal with `JsValue` errors.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a value from `localStorage`.
pub fn stored(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Persist a value to `localStorage`.
pub fn store(key: &str, value: &str) {
    let persisted = local_storage().is_some_and(|s| s.set_item(key, value).is_ok());
    if !persisted {
        tracing::warn!(key, "unable to persist to local storage");
    }
}

/// Whether the operating system asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Add or remove a class on `<html>`.
pub fn set_root_class(class: &str, enabled: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Blocking confirmation dialog. A missing dialog counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Full-page navigation, leaving the single-page app.
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
