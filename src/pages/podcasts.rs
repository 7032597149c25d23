//! Podcasts page — audio and video episodes with an in-modal player.

use leptos::prelude::*;

use content::item::{MediaKind, Podcast};
use content::listing::{Facet, paginate};

use crate::components::notice::{EmptyNotice, ErrorNotice};
use crate::components::pager::Pager;
use crate::state::detail::DetailState;
use crate::state::podcasts::{PAGE_SIZE, PodcastFilters, format_duration};

const CATEGORIES: [&str; 4] = ["Folk music", "Interviews", "Language lessons", "Storytelling"];

/// Podcasts page — fetches the episode list on mount, filters client-side by
/// media kind and category. Opening a card fetches the episode by id and
/// plays it in the modal.
#[component]
pub fn PodcastsPage() -> impl IntoView {
    let filters = RwSignal::new(PodcastFilters::default());
    let episodes = LocalResource::new(|| crate::net::api::fetch_podcasts());

    let detail = RwSignal::new(DetailState::<Podcast>::default());
    let current_id = RwSignal::new(None::<content::item::ItemId>);

    let open_episode = move |id: content::item::ItemId| {
        current_id.set(Some(id.clone()));
        let mut token = 0;
        detail.update(|d| token = d.begin());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_podcast_detail(&id)
                .await
                .map_err(|error| error.to_string());
            detail.update(|d| d.settle(token, outcome));
        });
    };

    let on_page = Callback::new(move |page| filters.update(|f| f.page = page));
    let on_list_retry = Callback::new(move |()| episodes.refetch());
    let on_detail_retry = Callback::new(move |()| {
        if let Some(id) = current_id.get_untracked() {
            open_episode(id);
        }
    });

    view! {
        <section class="podcasts-page">
            <header class="page-header">
                <h1>"Podcasts"</h1>
                <div class="filter-bar">
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_kind(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"Audio and video"</option>
                        <option value="audio">"Audio"</option>
                        <option value="video">"Video"</option>
                    </select>
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_category(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All categories"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Loading episodes..."</p> }>
                {move || {
                    episodes.get().map(|result| match result {
                        Err(error) => view! {
                            <ErrorNotice
                                message=format!("Could not load the podcasts: {error}")
                                retry=on_list_retry
                            />
                        }
                            .into_any(),
                        Ok(list) => {
                            let f = filters.get();
                            let paged = paginate(&list, |episode: &Podcast| f.matches(episode), f.page, PAGE_SIZE);
                            if paged.items.is_empty() {
                                view! { <EmptyNotice message="No episodes match the current filters."/> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="podcasts-page__results">
                                        <div class="podcasts-page__grid">
                                            {paged
                                                .items
                                                .into_iter()
                                                .map(|episode| {
                                                    let id = episode.id.clone();
                                                    view! {
                                                        <button class="podcast-card" on:click=move |_| open_episode(id.clone())>
                                                            <span class="podcast-card__kind">
                                                                {if episode.kind == MediaKind::Video { "Video" } else { "Audio" }}
                                                            </span>
                                                            <h3 class="podcast-card__title">{episode.title.clone()}</h3>
                                                            <p class="podcast-card__description">{episode.description.clone()}</p>
                                                            <span class="podcast-card__duration">
                                                                {format_duration(episode.duration_secs)}
                                                            </span>
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
                <PodcastDialog detail=detail on_retry=on_detail_retry/>
            </Show>
        </section>
    }
}

/// Modal playing one episode, fetched by id when the card was clicked.
#[component]
fn PodcastDialog(detail: RwSignal<DetailState<Podcast>>, on_retry: Callback<()>) -> impl IntoView {
    let close = move |_| detail.update(|d| d.close());

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--podcast" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    let d = detail.get();
                    if d.loading {
                        view! { <p class="dialog__loading">"Loading episode..."</p> }.into_any()
                    } else if let Some(error) = d.error {
                        view! {
                            <ErrorNotice
                                message=format!("Could not load this episode: {error}")
                                retry=on_retry
                            />
                        }
                            .into_any()
                    } else if let Some(episode) = d.item {
                        view! {
                            <div class="dialog__episode">
                                <h2 class="dialog__title">{episode.title.clone()}</h2>
                                <p class="dialog__meta">
                                    {format!("{} · {}", episode.category, format_duration(episode.duration_secs))}
                                </p>
                                {player(&episode)}
                                <p class="dialog__paragraph">{episode.description.clone()}</p>
                            </div>
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

fn player(episode: &Podcast) -> AnyView {
    match episode.kind {
        MediaKind::Video => view! {
            <video class="dialog__media" src=episode.media_url.clone() controls=true></video>
        }
        .into_any(),
        _ => view! {
            <audio class="dialog__player" src=episode.media_url.clone() controls=true></audio>
        }
        .into_any(),
    }
}
