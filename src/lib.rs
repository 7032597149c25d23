//! # samvaad-ui
//!
//! Leptos + WASM frontend for the Samvaad initiative website. Pages fetch
//! news, podcasts, exercises, gallery media, and learning resources from the
//! external content API and render them with facet/search filtering,
//! pagination, and detail-on-demand modals.
//!
//! Pure list and decoding logic lives in the `content` crate so it can be
//! unit-tested on the host; this crate contains pages, components, view
//! state, and the browser glue. All browser-only code compiles under the
//! `csr` feature; the default build is host-checkable and runs the tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
