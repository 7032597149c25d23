//! News page — field reports, filtered server-side, with a lazily fetched
//! article modal.

use leptos::prelude::*;

use content::item::NewsPost;
use content::listing::{Facet, paginate};

use crate::components::notice::{EmptyNotice, ErrorNotice};
use crate::components::pager::Pager;
use crate::components::read_aloud::ReadAloud;
use crate::state::detail::DetailState;
use crate::state::news::{NewsFilters, PAGE_SIZE, query_pairs};

const STATES: [&str; 6] = [
    "Assam",
    "Karnataka",
    "Kerala",
    "Maharashtra",
    "Rajasthan",
    "West Bengal",
];

const LANGUAGES: [&str; 6] = [
    "Assamese",
    "Bangla",
    "Hindi",
    "Kannada",
    "Malayalam",
    "Marathi",
];

/// News page. State, language, and search are sent to the API as query
/// parameters and the list re-fetches when they change; pagination stays
/// client-side. Opening a card fetches the full article by slug.
#[component]
pub fn NewsPage() -> impl IntoView {
    let filters = RwSignal::new(NewsFilters::default());
    let debounced_search = RwSignal::new(String::new());

    // Debounce the search box before it becomes a query parameter; the facet
    // selects take effect immediately.
    Effect::new(move || {
        let text = filters.get().search;
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(300).await;
                if filters.get_untracked().search == text {
                    debounced_search.set(text);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        debounced_search.set(text);
    });

    // The fetch key: facets plus the debounced search. Memoized so page
    // changes and not-yet-debounced keystrokes do not re-query the API.
    let query = Memo::new(move |_| {
        let f = filters.get();
        query_pairs(&f.state, &f.language, &debounced_search.get())
    });

    let posts = LocalResource::new(move || {
        let pairs = query.get();
        async move { crate::net::api::fetch_news(&pairs).await }
    });

    let detail = RwSignal::new(DetailState::<NewsPost>::default());
    let current_slug = RwSignal::new(None::<String>);

    let open_post = move |slug: String| {
        current_slug.set(Some(slug.clone()));
        let mut token = 0;
        detail.update(|d| token = d.begin());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_news_detail(&slug)
                .await
                .map_err(|error| error.to_string());
            detail.update(|d| d.settle(token, outcome));
        });
    };

    let on_page = Callback::new(move |page| filters.update(|f| f.page = page));
    let on_list_retry = Callback::new(move |()| posts.refetch());
    let on_detail_retry = Callback::new(move |()| {
        if let Some(slug) = current_slug.get_untracked() {
            open_post(slug);
        }
    });

    view! {
        <section class="news-page">
            <header class="page-header">
                <h1>"News"</h1>
                <div class="filter-bar">
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_state(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All states"</option>
                        {STATES
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_language(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All languages"</option>
                        {LANGUAGES
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="filter-bar__search"
                        type="search"
                        placeholder="Search articles..."
                        prop:value=move || filters.get().search
                        on:input=move |ev| {
                            filters.update(|f| f.set_search(event_target_value(&ev)));
                        }
                    />
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Loading news..."</p> }>
                {move || {
                    posts.get().map(|result| match result {
                        Err(error) => view! {
                            <ErrorNotice
                                message=format!("Could not load the news: {error}")
                                retry=on_list_retry
                            />
                        }
                            .into_any(),
                        Ok(list) => {
                            let page = filters.get().page;
                            let paged = paginate(&list, |_: &NewsPost| true, page, PAGE_SIZE);
                            if paged.items.is_empty() {
                                view! { <EmptyNotice message="No articles match the current filters."/> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="news-page__results">
                                        <div class="news-page__grid">
                                            {paged
                                                .items
                                                .into_iter()
                                                .map(|post| {
                                                    let slug = post.slug.clone();
                                                    view! {
                                                        <button class="news-card" on:click=move |_| open_post(slug.clone())>
                                                            {post
                                                                .image_url
                                                                .clone()
                                                                .map(|url| view! { <img class="news-card__image" src=url alt=post.title.clone()/> })}
                                                            <h3 class="news-card__title">{post.title.clone()}</h3>
                                                            <p class="news-card__excerpt">{post.excerpt.clone()}</p>
                                                            <span class="news-card__meta">{meta_line(&post)}</span>
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <Pager page=paged.page total_pages=paged.total_pages on_page=on_page/>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    })
                }}
            </Suspense>

            <Show when=move || detail.get().open>
                <NewsDialog detail=detail on_retry=on_detail_retry/>
            </Show>
        </section>
    }
}

/// Modal showing one article, fetched by slug when the card was clicked.
#[component]
fn NewsDialog(detail: RwSignal<DetailState<NewsPost>>, on_retry: Callback<()>) -> impl IntoView {
    let close = move |_| detail.update(|d| d.close());

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--news" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    let d = detail.get();
                    if d.loading {
                        view! { <p class="dialog__loading">"Loading article..."</p> }.into_any()
                    } else if let Some(error) = d.error {
                        view! {
                            <ErrorNotice
                                message=format!("Could not load this article: {error}")
                                retry=on_retry
                            />
                        }
                            .into_any()
                    } else if let Some(post) = d.item {
                        view! {
                            <article class="dialog__article">
                                <h2 class="dialog__title">{post.title.clone()}</h2>
                                <p class="dialog__meta">{meta_line(&post)}</p>
                                <ReadAloud text=format!("{}. {}", post.title, post.body)/>
                                {post
                                    .body
                                    .split("\n\n")
                                    .filter(|paragraph| !paragraph.trim().is_empty())
                                    .map(|paragraph| view! { <p class="dialog__paragraph">{paragraph.to_owned()}</p> })
                                    .collect::<Vec<_>>()}
                            </article>
                        }
                            .into_any()
                    } else {
                        ().into_any()
                    }
                }}
                <button class="btn dialog__close" on:click=close>
                    "Close"
                </button>
            </div>
        </div>
    }
}

fn meta_line(post: &NewsPost) -> String {
    [
        post.state.as_str(),
        post.language.as_str(),
        post.published_at.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" · ")
}
