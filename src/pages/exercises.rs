//! Exercises page — practice sets with an in-modal question form.

use leptos::prelude::*;

use content::exercise::{AnswerSheet, Grade, grade, parse_questions};
use content::item::{Exercise, ItemId};
use content::listing::{Facet, paginate};

use crate::components::notice::{EmptyNotice, ErrorNotice};
use crate::components::pager::Pager;
use crate::state::detail::DetailState;
use crate::state::exercises::{ExerciseFilters, PAGE_SIZE};

const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];
const CATEGORIES: [&str; 4] = ["Grammar", "Listening", "Script", "Vocabulary"];

/// Exercises page — fetches the list on mount, filters client-side by level
/// and category. Opening a card fetches the exercise by id; its embedded
/// question document is parsed when the modal renders.
#[component]
pub fn ExercisesPage() -> impl IntoView {
    let filters = RwSignal::new(ExerciseFilters::default());
    let exercises = LocalResource::new(|| crate::net::api::fetch_exercises());

    let detail = RwSignal::new(DetailState::<Exercise>::default());
    let current_id = RwSignal::new(None::<ItemId>);

    let open_exercise = move |id: ItemId| {
        current_id.set(Some(id.clone()));
        let mut token = 0;
        detail.update(|d| token = d.begin());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_exercise_detail(&id)
                .await
                .map_err(|error| error.to_string());
            detail.update(|d| d.settle(token, outcome));
        });
    };

    let on_page = Callback::new(move |page| filters.update(|f| f.page = page));
    let on_list_retry = Callback::new(move |()| exercises.refetch());
    let on_detail_retry = Callback::new(move |()| {
        if let Some(id) = current_id.get_untracked() {
            open_exercise(id);
        }
    });

    view! {
        <section class="exercises-page">
            <header class="page-header">
                <h1>"Exercises"</h1>
                <div class="filter-bar">
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| {
                            filters.update(|f| f.set_level(Facet::from_select(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"All levels"</option>
                        {LEVELS
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
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

            <Suspense fallback=move || view! { <p class="page-loading">"Loading exercises..."</p> }>
                {move || {
                    exercises.get().map(|result| match result {
                        Err(error) => view! {
                            <ErrorNotice
                                message=format!("Could not load the exercises: {error}")
                                retry=on_list_retry
                            />
                        }
                            .into_any(),
                        Ok(list) => {
                            let f = filters.get();
                            let paged = paginate(&list, |exercise: &Exercise| f.matches(exercise), f.page, PAGE_SIZE);
                            if paged.items.is_empty() {
                                view! { <EmptyNotice message="No exercises match the current filters."/> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="exercises-page__results">
                                        <div class="exercises-page__grid">
                                            {paged
                                                .items
                                                .into_iter()
                                                .map(|exercise| {
                                                    let id = exercise.id.clone();
                                                    view! {
                                                        <button class="exercise-card" on:click=move |_| open_exercise(id.clone())>
                                                            <h3 class="exercise-card__title">{exercise.title.clone()}</h3>
                                                            <p class="exercise-card__description">{exercise.description.clone()}</p>
                                                            <span class="exercise-card__meta">
                                                                {format!("{} · {}", exercise.level, exercise.category)}
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
                <ExerciseDialog detail=detail on_retry=on_detail_retry/>
            </Show>
        </section>
    }
}

/// Modal running one exercise: question form, local grading, and submission.
///
/// Remounts on every open (via `Show`), so the answer sheet and grade start
/// fresh each time.
#[component]
fn ExerciseDialog(detail: RwSignal<DetailState<Exercise>>, on_retry: Callback<()>) -> impl IntoView {
    let answers = RwSignal::new(AnswerSheet::default());
    let result = RwSignal::new(None::<Grade>);
    let submit_note = RwSignal::new(None::<String>);

    let close = move |_| detail.update(|d| d.close());

    let on_submit = move |_| {
        let Some(exercise) = detail.get_untracked().item else {
            return;
        };
        let Ok(questions) = parse_questions(&exercise.questions) else {
            return;
        };
        let sheet = answers.get_untracked();
        result.set(Some(grade(&questions, &sheet)));
        let id = exercise.id.clone();
        leptos::task::spawn_local(async move {
            if let Err(error) = crate::net::api::submit_exercise(&id, &sheet).await {
                submit_note.set(Some(format!("Your answers could not be submitted: {error}")));
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--exercise" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    let d = detail.get();
                    if d.loading {
                        view! { <p class="dialog__loading">"Loading exercise..."</p> }.into_any()
                    } else if let Some(error) = d.error {
                        view! {
                            <ErrorNotice
                                message=format!("Could not load this exercise: {error}")
                                retry=on_retry
                            />
                        }
                            .into_any()
                    } else if let Some(exercise) = d.item {
                        match parse_questions(&exercise.questions) {
                            Err(_) => view! {
                                <div class="dialog__article">
                                    <h2 class="dialog__title">{exercise.title.clone()}</h2>
                                    <EmptyNotice message="We could not load the questions for this exercise."/>
                                </div>
                            }
                                .into_any(),
                            Ok(questions) => view! {
                                <div class="dialog__article">
                                    <h2 class="dialog__title">{exercise.title.clone()}</h2>
                                    <p class="dialog__meta">
                                        {format!("{} · {}", exercise.level, exercise.category)}
                                    </p>
                                    {question_form(&questions, answers, result)}
                                    <div class="dialog__actions">
                                        <button class="btn btn--primary" on:click=on_submit>
                                            "Check my answers"
                                        </button>
                                    </div>
                                    {move || {
                                        result.get().map(|g| {
                                            view! {
                                                <p class="exercise-result">
                                                    {format!("You got {} of {} correct.", g.correct, g.total)}
                                                </p>
                                            }
                                        })
                                    }}
                                    {move || {
                                        submit_note.get().map(|note| {
                                            view! { <p class="dialog__note">{note}</p> }
                                        })
                                    }}
                                </div>
                            }
                                .into_any(),
                        }
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

fn question_form(
    questions: &[content::exercise::Question],
    answers: RwSignal<AnswerSheet>,
    result: RwSignal<Option<Grade>>,
) -> AnyView {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let verdict = move || {
                result
                    .get()
                    .map(|g| g.per_question.get(index).copied().unwrap_or(false))
            };
            view! {
                <fieldset
                    class="exercise-question"
                    class:exercise-question--correct=move || verdict() == Some(true)
                    class:exercise-question--wrong=move || verdict() == Some(false)
                >
                    <legend class="exercise-question__prompt">{question.prompt.clone()}</legend>
                    {question
                        .choices
                        .iter()
                        .map(|choice| {
                            let value = choice.clone();
                            let chosen = choice.clone();
                            view! {
                                <label class="exercise-question__choice">
                                    <input
                                        type="radio"
                                        name=format!("question-{index}")
                                        prop:checked=move || {
                                            answers.get().answers.get(&index) == Some(&value)
                                        }
                                        on:change=move |_| {
                                            answers.update(|sheet| sheet.select(index, chosen.clone()));
                                        }
                                    />
                                    {choice.clone()}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}
