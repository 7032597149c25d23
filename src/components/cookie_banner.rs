//! Cookie-consent banner.

use leptos::prelude::*;

use content::consent::ConsentPrefs;

use crate::state::consent::ConsentState;

/// Consent banner fixed to the bottom of the viewport.
///
/// Shown until a decision exists, either made here or restored from storage
/// on startup. Both buttons persist the decision, so later visits never
/// re-show the banner.
#[component]
pub fn CookieBanner() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();

    let decide = move |prefs: ConsentPrefs| {
        crate::util::consent_store::store(prefs);
        consent.update(|c| c.decide(prefs));
    };

    view! {
        <Show when=move || consent.get().banner_visible()>
            <div class="cookie-banner">
                <p class="cookie-banner__text">
                    "We use cookies to remember your preferences and understand how the site is used."
                </p>
                <div class="cookie-banner__actions">
                    <button class="btn" on:click=move |_| decide(ConsentPrefs::essential_only())>
                        "Essential only"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| decide(ConsentPrefs::accept_all())>
                        "Accept all"
                    </button>
                </div>
            </div>
        </Show>
    }
}
