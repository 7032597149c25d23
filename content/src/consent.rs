//! Cookie-consent preferences and their stored form.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use serde::{Deserialize, Serialize};

/// The visitor's cookie decision, persisted under a single browser-storage
/// key by the UI crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPrefs {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl ConsentPrefs {
    /// The "Accept all" decision.
    #[must_use]
    pub fn accept_all() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
        }
    }

    /// The "Essential only" decision. Necessary cookies cannot be refused.
    #[must_use]
    pub fn essential_only() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
        }
    }
}

/// Serialize a decision for storage.
#[must_use]
pub fn to_stored(prefs: ConsentPrefs) -> String {
    serde_json::to_string(&prefs).unwrap_or_default()
}

/// Parse a stored decision. Garbage (old formats, manual edits) reads as no
/// decision, which re-shows the banner.
#[must_use]
pub fn from_stored(raw: &str) -> Option<ConsentPrefs> {
    match serde_json::from_str(raw) {
        Ok(prefs) => Some(prefs),
        Err(_) => None,
    }
}
