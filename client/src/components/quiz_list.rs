//! All-quizzes list with per-quiz map and delete action.
//!
//! DESIGN
//! ======
//! One quiz at a time is expanded. The expanded quiz's questions feed a
//! single `QuizMap`, so collapsing or switching quizzes unmounts the old map.

use leptos::prelude::*;

use crate::components::quiz_map::QuizMap;
use crate::net::types::{Question, Quiz, QuizKey};
use crate::state::quizzes::QuizListState;

/// Fetch the list into `state`.
fn load(state: RwSignal<QuizListState>) {
    state.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::http::GlooTransport::default();
        match crate::net::api::fetch_quizzes(&transport).await {
            Ok(items) => state.update(|s| s.load_succeeded(items)),
            Err(err) => {
                leptos::logging::warn!("quiz list load failed: {err}");
                state.update(|s| s.load_failed(crate::net::api::fetch_error_message(&err)));
            }
        }
    });
}

/// Delete the quiz behind `key` with the stored token and update `state`.
fn delete(state: RwSignal<QuizListState>, key: QuizKey) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::session::{SessionTokens, stored_token};

        let transport = crate::net::http::GlooTransport::default();
        let token = stored_token(&SessionTokens);
        match crate::net::api::delete_quiz(&transport, token.as_deref(), &key.quiz_id).await {
            Ok(()) => state.update(|s| s.remove(&key)),
            Err(err) => state.update(|s| s.delete_failed(crate::net::api::delete_error_message(&err))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, key);
}

#[component]
pub fn QuizList(
    /// Bumped by the page to force a reload, e.g. after a quiz was created.
    #[prop(into, optional)]
    refresh: Signal<u32>,
) -> impl IntoView {
    let state = RwSignal::new(QuizListState::default());

    Effect::new(move || {
        refresh.track();
        load(state);
    });

    let selected_questions = Signal::derive(move || state.with(QuizListState::selected_questions));
    let showing_list = Memo::new(move |_| state.with(|s| !(s.loading && s.items.is_empty()) && s.error.is_none()));

    view! {
        <section class="quiz-list">
            <Show
                when=move || showing_list.get()
                fallback=move || {
                    state
                        .with(|s| s.error.clone())
                        .map_or_else(
                            || view! { <p>"Loading quizzes..."</p> }.into_any(),
                            |error| view! { <p class="quiz-list__error">"Error: " {error}</p> }.into_any(),
                        )
                }
            >
                <h1>"All Quizzes"</h1>
                <Show when=move || state.with(|s| s.action_error.is_some())>
                    <p class="quiz-list__error">
                        {move || state.with(|s| s.action_error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <ul>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=Quiz::key
                        children=move |quiz| view! { <QuizListItem quiz=quiz state=state selected_questions=selected_questions /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn QuizListItem(
    quiz: Quiz,
    state: RwSignal<QuizListState>,
    selected_questions: Signal<Vec<Question>>,
) -> impl IntoView {
    let key = quiz.key();
    let Quiz { quiz_id, user_id, username, .. } = quiz;
    let is_open = {
        let key = key.clone();
        move || state.with(|s| s.is_selected(&key))
    };
    let on_toggle = {
        let key = key.clone();
        move |_| state.update(|s| s.toggle_select(&key))
    };
    let on_delete = move |_| delete(state, key.clone());

    view! {
        <li class="quiz-list__item">
            <h2>"Quiz ID: " {quiz_id}</h2>
            <p>"User ID: " {user_id}</p>
            <p>"Username: " {username}</p>
            <button type="button" on:click=on_toggle>
                "Show More Information"
            </button>
            <Show when=is_open>
                <div class="quiz-list__details">
                    <QuizMap questions=selected_questions />
                    <button type="button" class="quiz-list__delete" on:click=on_delete.clone()>
                        "Delete Quiz"
                    </button>
                </div>
            </Show>
        </li>
    }
}
