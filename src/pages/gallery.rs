//! Gallery page — photos and clips from workshops and festivals.

use leptos::prelude::*;

use content::item::{GalleryItem, MediaKind};
use content::listing::{Facet, paginate};

use crate::components::notice::{EmptyNotice, ErrorNotice};
use crate::components::pager::Pager;
use crate::state::gallery::{GalleryFilters, PAGE_SIZE};

/// Gallery page — fetches the full list on mount and filters client-side by
/// media kind. Clicking a tile opens a lightbox over the already-loaded item.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let filters = RwSignal::new(GalleryFilters::default());
    let items = LocalResource::new(|| crate::net::api::fetch_gallery());
    let selected = RwSignal::new(None::<GalleryItem>);

    let on_page = Callback::new(move |page| filters.update(|f| f.page = page));
    let on_retry = Callback::new(move |()| items.refetch());

    view! {
        <section class="gallery-page">
            <header class="page-header">
                <h1>"Gallery"</h1>
                <div class="filter-bar">
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_kind(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All media"</option>
                        <option value="image">"Photos"</option>
                        <option value="video">"Videos"</option>
                    </select>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Loading the gallery..."</p> }>
                {move || {
                    items.get().map(|result| match result {
                        Err(error) => view! {
                            <ErrorNotice
                                message=format!("Could not load the gallery: {error}")
                                retry=on_retry
                            />
                        }
                            .into_any(),
                        Ok(list) => {
                            let f = filters.get();
                            let paged = paginate(&list, |item: &GalleryItem| f.matches(item), f.page, PAGE_SIZE);
                            if paged.items.is_empty() {
                                view! { <EmptyNotice message="No media matches the current filter."/> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="gallery-page__results">
                                        <div class="gallery-page__grid">
                                            {paged
                                                .items
                                                .into_iter()
                                                .map(|item| {
                                                    let opened = item.clone();
                                                    view! {
                                                        <button
                                                            class="gallery-card"
                                                            on:click=move |_| selected.set(Some(opened.clone()))
                                                        >
                                                            {media_thumb(&item)}
                                                            <span class="gallery-card__title">{item.title.clone()}</span>
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

            {move || {
                selected.get().map(|item| {
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
                            <div class="dialog dialog--lightbox" on:click=move |ev| ev.stop_propagation()>
                                {media_full(&item)}
                                <h2 class="dialog__title">{item.title.clone()}</h2>
                                <p class="dialog__caption">{item.caption.clone()}</p>
                                <button class="btn dialog__close" on:click=move |_| selected.set(None)>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}
        </section>
    }
}

fn media_thumb(item: &GalleryItem) -> AnyView {
    match item.kind {
        MediaKind::Image => view! {
            <img class="gallery-card__media" src=item.media_url.clone() alt=item.title.clone()/>
        }
        .into_any(),
        _ => view! { <video class="gallery-card__media" src=item.media_url.clone()></video> }
            .into_any(),
    }
}

fn media_full(item: &GalleryItem) -> AnyView {
    match item.kind {
        MediaKind::Image => view! {
            <img class="dialog__media" src=item.media_url.clone() alt=item.title.clone()/>
        }
        .into_any(),
        _ => view! { <video class="dialog__media" src=item.media_url.clone() controls=true></video> }
            .into_any(),
    }
}
