//! Site-wide navigation header.

use leptos::prelude::*;

/// Top navigation bar with the initiative brand and section links.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Samvaad"
            </a>
            <nav class="site-header__nav">
                <a href="/about">"About"</a>
                <a href="/news">"News"</a>
                <a href="/podcasts">"Podcasts"</a>
                <a href="/exercises">"Exercises"</a>
                <a href="/gallery">"Gallery"</a>
                <a href="/resources">"Resources"</a>
            </nav>
        </header>
    }
}
