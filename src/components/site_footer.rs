//! Site-wide footer.

use leptos::prelude::*;

/// Footer with section links and the initiative's small print.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__nav">
                <a href="/about">"About the initiative"</a>
                <a href="/resources">"Resources"</a>
                <a href="/news">"News"</a>
            </nav>
            <p class="site-footer__note">
                "Samvaad is a collaborative programme celebrating the languages and cultures of India."
            </p>
        </footer>
    }
}
