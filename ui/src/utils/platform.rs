//! Browser environment helpers

use web_sys::window;

use crate::console_debug;
use crate::features::list_draft::Language;
use crate::services::storage::PreferenceStore;

/// Language from the browser's `navigator.language`, Korean when unavailable
pub fn detect_browser_language() -> Language {
    let tag = window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_default();

    console_debug!("Navigator language: {}", tag);
    Language::from_tag(&tag)
}

/// Stored preference first, then the browser language
pub fn initial_language() -> Language {
    PreferenceStore::get_language().unwrap_or_else(|_| detect_browser_language())
}
