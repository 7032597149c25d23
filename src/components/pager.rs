//! Pagination controls shared by every listing page.

use leptos::prelude::*;

/// Previous/next pager rendered under a listing grid.
///
/// Both buttons disable at the bounds, so there is no reachable page past
/// the last one. Callers re-render the pager with fresh numbers whenever the
/// filtered result changes.
#[component]
pub fn Pager(page: usize, total_pages: usize, on_page: Callback<usize>) -> impl IntoView {
    view! {
        <Show when=move || { total_pages > 1 }>
            <nav class="pager">
                <button
                    class="btn pager__prev"
                    disabled={page <= 1}
                    on:click=move |_| on_page.run(page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pager__label">{format!("Page {page} of {total_pages}")}</span>
                <button
                    class="btn pager__next"
                    disabled={page >= total_pages}
                    on:click=move |_| on_page.run((page + 1).min(total_pages))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
