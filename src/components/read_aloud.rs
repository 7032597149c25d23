//! Read-aloud button backed by the injected speech capability.

use leptos::prelude::*;

use crate::util::speech::Narrator;

/// Speaker button that reads the given text aloud via [`Narrator`].
#[component]
pub fn ReadAloud(text: String) -> impl IntoView {
    let narrator = expect_context::<Narrator>();
    let text = StoredValue::new(text);

    view! {
        <button
            class="btn read-aloud"
            title="Read this aloud"
            on:click=move |_| text.with_value(|t| narrator.speak(t))
        >
            "\u{1f50a} Listen"
        </button>
    }
}
