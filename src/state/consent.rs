#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use content::consent::ConsentPrefs;

/// Cookie-consent banner state. `prefs` is `None` until the visitor decides
/// (or a stored decision is restored on startup); the banner is shown only
/// while no decision exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsentState {
    pub prefs: Option<ConsentPrefs>,
}

impl ConsentState {
    /// Whether the banner should currently be rendered.
    #[must_use]
    pub fn banner_visible(&self) -> bool {
        self.prefs.is_none()
    }

    /// Record a decision, fresh or restored from storage.
    pub fn decide(&mut self, prefs: ConsentPrefs) {
        self.prefs = Some(prefs);
    }
}
