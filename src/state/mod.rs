//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`news`, `gallery`, etc.) so each page depends on a
//! small focused model, plus two cross-page pieces: the generic modal state
//! (`detail`) and the cookie-consent decision (`consent`). All of it is plain
//! data wrapped in `RwSignal`s by the components, so every rule ("changing a
//! facet resets the page", "a stale response never lands") is unit-testable
//! without a browser.

pub mod consent;
pub mod detail;
pub mod exercises;
pub mod gallery;
pub mod news;
pub mod podcasts;
pub mod resources;
