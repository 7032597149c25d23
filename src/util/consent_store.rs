//! Persistence for the cookie-consent decision.
//!
//! One `localStorage` key holds the serialized `ConsentPrefs`. Requires a
//! browser environment; host builds see no stored value and store nothing.

use content::consent::ConsentPrefs;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "samvaad_consent";

/// Read the stored consent decision, if any.
#[must_use]
pub fn load() -> Option<ConsentPrefs> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = match window.local_storage() {
            Ok(Some(storage)) => storage,
            _ => return None,
        };
        let raw = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            _ => return None,
        };
        content::consent::from_stored(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a consent decision.
pub fn store(prefs: ConsentPrefs) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &content::consent::to_stored(prefs));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prefs;
    }
}
