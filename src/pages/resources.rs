//! Resources page — external learning material the site links out to.

use leptos::prelude::*;

use content::item::Resource;
use content::listing::{Facet, paginate};

use crate::components::notice::{EmptyNotice, ErrorNotice};
use crate::components::pager::Pager;
use crate::state::resources::{PAGE_SIZE, ResourceFilters};

const KINDS: [&str; 4] = ["Book", "Course", "Dictionary", "Archive"];

/// Resources page — fetches the list on mount, filters client-side by
/// resource type and search text. Cards link straight to the target URL;
/// there is no detail view.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let filters = RwSignal::new(ResourceFilters::default());
    let resources = LocalResource::new(|| crate::net::api::fetch_resources());

    let on_page = Callback::new(move |page| filters.update(|f| f.page = page));
    let on_retry = Callback::new(move |()| resources.refetch());

    view! {
        <section class="resources-page">
            <header class="page-header">
                <h1>"Resources"</h1>
                <div class="filter-bar">
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_kind(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All types"</option>
                        {KINDS
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="filter-bar__search"
                        type="search"
                        placeholder="Search resources..."
                        prop:value=move || filters.get().search
                        on:input=move |ev| {
                            filters.update(|f| f.set_search(event_target_value(&ev)));
                        }
                    />
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page-loading">"Loading resources..."</p> }>
                {move || {
                    resources.get().map(|result| match result {
                        Err(error) => view! {
                            <ErrorNotice
                                message=format!("Could not load the resources: {error}")
                                retry=on_retry
                            />
                        }
                            .into_any(),
                        Ok(list) => {
                            let f = filters.get();
                            let paged = paginate(&list, |resource: &Resource| f.matches(resource), f.page, PAGE_SIZE);
                            if paged.items.is_empty() {
                                view! { <EmptyNotice message="No resources match the current filters."/> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="resources-page__results">
                                        <div class="resources-page__grid">
                                            {paged
                                                .items
                                                .into_iter()
                                                .map(|resource| {
                                                    view! {
                                                        <a
                                                            class="resource-card"
                                                            href=resource.url.clone()
                                                            target="_blank"
                                                            rel="noopener"
                                                        >
                                                            <span class="resource-card__kind">{resource.kind.clone()}</span>
                                                            <h3 class="resource-card__title">{resource.title.clone()}</h3>
                                                            <p class="resource-card__description">{resource.description.clone()}</p>
                                                        </a>
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
        </section>
    }
}
