//! About page — the initiative's story, with a read-aloud control.

use leptos::prelude::*;

use crate::components::read_aloud::ReadAloud;

const PARAGRAPHS: [&str; 3] = [
    "Samvaad began as a handful of reading rooms and one travelling recording \
     booth. Today it connects schools, cultural trusts, and volunteers across \
     a dozen states, all working on the same idea: a language stays alive when \
     people have interesting things to do in it.",
    "The site you are reading collects what the programme produces: news from \
     the field, podcast conversations, practice exercises written by teachers, \
     and media from workshops and festivals. Everything is free to use in \
     classrooms and community groups.",
    "Samvaad is run by its partner organisations. If your school or collective \
     would like to host a workshop or contribute recordings, the resources \
     section lists how to reach us.",
];

/// About page. Static content; the read-aloud button speaks the whole text.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <header class="page-header">
                <h1>"About the initiative"</h1>
                <ReadAloud text=PARAGRAPHS.join(" ")/>
            </header>
            {PARAGRAPHS
                .into_iter()
                .map(|text| view! { <p class="about-page__paragraph">{text}</p> })
                .collect::<Vec<_>>()}
        </section>
    }
}
