//! Quiz-creation form: name, map-picked question drafts, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a stored token at mount; without one the visitor is sent to
//! `/login`. Submission creates the quiz and then attaches drafts one by one
//! through `net::api::submit_quiz`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::quiz_map::QuizMap;
use crate::state::draft::{LOGIN_REQUIRED, QuizDraft};
use crate::util::auth::{LOGIN_ROUTE, install_pending_navigation};
use crate::util::session::{SessionTokens, stored_token};

#[component]
pub fn CreateQuiz(
    /// Fired after the quiz exists server-side.
    #[prop(optional)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let draft = RwSignal::new(QuizDraft::default());
    let pending_nav = RwSignal::new(None::<&'static str>);
    install_pending_navigation(pending_nav, use_navigate());

    Effect::new(move || {
        if stored_token(&SessionTokens).is_none() {
            draft.update(|d| d.error = Some(LOGIN_REQUIRED.to_owned()));
            pending_nav.set(Some(LOGIN_ROUTE));
        }
    });

    let on_location = Callback::new(move |(latitude, longitude): (String, String)| {
        draft.update(|d| d.set_location(latitude, longitude));
    });

    let on_add = move |_| {
        draft.update(|d| {
            d.add_question();
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if draft.get_untracked().submitting {
            return;
        }
        let Some(token) = stored_token(&SessionTokens) else {
            draft.update(|d| d.error = Some(LOGIN_REQUIRED.to_owned()));
            pending_nav.set(Some(LOGIN_ROUTE));
            return;
        };
        let mut payload = None;
        draft.update(|d| payload = d.begin_submit());
        let Some((name, questions)) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::GlooTransport::default();
            match crate::net::api::submit_quiz(&transport, &token, &name, &questions).await {
                Ok(report) => {
                    leptos::logging::log!("Quiz created with ID: {}", report.quiz_id);
                    draft.update(|d| d.submit_succeeded(&report));
                    if let Some(callback) = on_created {
                        callback.run(());
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("Error creating quiz: {err}");
                    draft.update(|d| d.submit_failed(crate::net::api::create_error_message(&err)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, name, questions, on_created);
    };

    view! {
        <section class="create-quiz">
            <h1>"Create a New Quiz"</h1>
            <form class="create-quiz__form" on:submit=on_submit>
                <label class="create-quiz__field">
                    "Quiz Name:"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <h2>"Add Questions"</h2>
                <label class="create-quiz__field">
                    "Question:"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.question.clone())
                        on:input=move |ev| draft.update(|d| d.question = event_target_value(&ev))
                    />
                </label>
                <label class="create-quiz__field">
                    "Answer:"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.answer.clone())
                        on:input=move |ev| draft.update(|d| d.answer = event_target_value(&ev))
                    />
                </label>
                <div class="create-quiz__coords">
                    <label class="create-quiz__field">
                        "Latitude:"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.location.latitude.clone())
                            on:input=move |ev| draft.update(|d| d.location.latitude = event_target_value(&ev))
                        />
                    </label>
                    <label class="create-quiz__field">
                        "Longitude:"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.location.longitude.clone())
                            on:input=move |ev| draft.update(|d| d.location.longitude = event_target_value(&ev))
                        />
                    </label>
                </div>
                <QuizMap on_location=on_location />
                <button type="button" class="create-quiz__add" on:click=on_add>
                    "Add Question"
                </button>
                <button type="submit" class="create-quiz__submit" disabled=move || draft.with(|d| d.submitting)>
                    "Create Quiz"
                </button>
            </form>
            <Show when=move || draft.with(|d| d.success.is_some())>
                <p class="create-quiz__success">{move || draft.with(|d| d.success.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || draft.with(|d| d.error.is_some())>
                <p class="create-quiz__error">{move || draft.with(|d| d.error.clone().unwrap_or_default())}</p>
            </Show>
            <h2>"Questions:"</h2>
            <ul class="create-quiz__drafts">
                {move || {
                    draft
                        .with(|d| d.questions.clone())
                        .into_iter()
                        .map(|q| {
                            view! {
                                <li>
                                    <p>"Question: " {q.question}</p>
                                    <p>"Answer: " {q.answer}</p>
                                    <p>"Location: " {q.location.latitude} ", " {q.location.longitude}</p>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
