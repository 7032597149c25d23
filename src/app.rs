//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cookie_banner::CookieBanner;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::pages::{
    about::AboutPage, exercises::ExercisesPage, gallery::GalleryPage, home::HomePage,
    news::NewsPage, podcasts::PodcastsPage, resources::ResourcesPage,
};
use crate::state::consent::ConsentState;
use crate::util::speech::Narrator;

/// Root application component.
///
/// Provides the shared contexts (the consent decision and the read-aloud
/// capability) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let consent = RwSignal::new(ConsentState::default());
    provide_context(consent);
    provide_context(Narrator::default());

    // Restore a stored consent decision once on startup.
    Effect::new(move || {
        if let Some(prefs) = crate::util::consent_store::load() {
            consent.update(|c| c.decide(prefs));
        }
    });

    view! {
        <Title text="Samvaad"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=StaticSegment("podcasts") view=PodcastsPage/>
                    <Route path=StaticSegment("exercises") view=ExercisesPage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <CookieBanner/>
        </Router>
    }
}
