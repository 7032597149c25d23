//! Home page — hero banner, initiative teaser, and partners.

use leptos::prelude::*;

const SLIDES: [(&str, &str); 3] = [
    (
        "Every language carries a world",
        "Stories, songs, and scripts from across the country, in one place.",
    ),
    (
        "Learn by doing",
        "Exercises and podcasts built around everyday speech, not textbooks.",
    ),
    (
        "A shared stage",
        "Partner schools and cultural groups bring the initiative to life.",
    ),
];

const PARTNERS: [&str; 6] = [
    "Bhasha Kendra Pune",
    "Karnataka Folklore Trust",
    "Sahitya Circle Kolkata",
    "Malhar School of Music",
    "Thiruvananthapuram Reading Rooms",
    "North-East Story Project",
];

/// Landing page with a rotating hero banner, a short introduction, and the
/// partner organisations. Static content, no fetch.
#[component]
pub fn HomePage() -> impl IntoView {
    let slide = RwSignal::new(0usize);

    let prev = move |_| {
        slide.update(|s| *s = if *s == 0 { SLIDES.len() - 1 } else { *s - 1 });
    };
    let next = move |_| {
        slide.update(|s| *s = (*s + 1) % SLIDES.len());
    };

    view! {
        <section class="home-page">
            <div class="hero">
                <button class="hero__arrow hero__arrow--prev" on:click=prev title="Previous slide">
                    "\u{2190}"
                </button>
                <div class="hero__slide">
                    <h1 class="hero__title">{move || SLIDES[slide.get()].0}</h1>
                    <p class="hero__tagline">{move || SLIDES[slide.get()].1}</p>
                </div>
                <button class="hero__arrow hero__arrow--next" on:click=next title="Next slide">
                    "\u{2192}"
                </button>
            </div>

            <div class="home-page__intro">
                <h2>"What is Samvaad?"</h2>
                <p>
                    "Samvaad is an educational and cultural initiative that brings India's \
                     languages into everyday conversation: news from the field, podcasts \
                     with speakers and scholars, hands-on exercises, and a growing gallery \
                     of events."
                </p>
                <a class="btn btn--primary" href="/about">
                    "Read more about the initiative"
                </a>
            </div>

            <div class="home-page__sections">
                <a class="section-card" href="/news">
                    <h3>"News"</h3>
                    <p>"Field reports and announcements from partner regions."</p>
                </a>
                <a class="section-card" href="/podcasts">
                    <h3>"Podcasts"</h3>
                    <p>"Conversations in and about the languages we work with."</p>
                </a>
                <a class="section-card" href="/exercises">
                    <h3>"Exercises"</h3>
                    <p>"Short practice sets for learners at every level."</p>
                </a>
                <a class="section-card" href="/gallery">
                    <h3>"Gallery"</h3>
                    <p>"Photos and clips from workshops and festivals."</p>
                </a>
            </div>

            <div class="home-page__partners">
                <h2>"Our partners"</h2>
                <ul class="partner-list">
                    {PARTNERS
                        .into_iter()
                        .map(|name| view! { <li class="partner-list__item">{name}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
