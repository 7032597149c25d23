//! Inline notices for error and empty states.

use leptos::prelude::*;

/// Error notice with a retry action. Rendered in place of a grid or inside a
/// modal; the surrounding page stays intact and interactive.
#[component]
pub fn ErrorNotice(#[prop(into)] message: String, retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="notice notice--error">
            <p class="notice__message">{message}</p>
            <button class="btn" on:click=move |_| retry.run(())>
                "Try again"
            </button>
        </div>
    }
}

/// Neutral notice for empty results ("nothing matches the current filter").
#[component]
pub fn EmptyNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="notice">
            <p class="notice__message">{message}</p>
        </div>
    }
}
