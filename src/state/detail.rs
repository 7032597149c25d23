#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

/// Modal state for a lazily fetched content item.
///
/// Each `begin` hands out a monotonic token which the eventual response must
/// present to `settle`. A response carrying a stale token (the modal was
/// closed or reopened for another item in the meantime) is dropped, so rapid
/// open/close/open sequences can never show the wrong item.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailState<T> {
    pub open: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub item: Option<T>,
    token: u64,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            open: false,
            loading: false,
            error: None,
            item: None,
            token: 0,
        }
    }
}

impl<T> DetailState<T> {
    /// Open the modal and start a fetch, discarding any previous result.
    /// Returns the token the response must present to [`Self::settle`].
    pub fn begin(&mut self) -> u64 {
        self.token += 1;
        self.open = true;
        self.loading = true;
        self.error = None;
        self.item = None;
        self.token
    }

    /// Apply a fetch outcome. Stale tokens and responses arriving after
    /// [`Self::close`] are ignored.
    pub fn settle(&mut self, token: u64, outcome: Result<T, String>) {
        if token != self.token || !self.open {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(item) => self.item = Some(item),
            Err(message) => self.error = Some(message),
        }
    }

    /// Close the modal and clear all fetch state, so reopening re-fetches.
    pub fn close(&mut self) {
        self.token += 1;
        self.open = false;
        self.loading = false;
        self.error = None;
        self.item = None;
    }
}
