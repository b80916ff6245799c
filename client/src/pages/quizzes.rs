//! Quizzes page: the creation form above the list of all quizzes.

use leptos::prelude::*;

use crate::components::create_quiz::CreateQuiz;
use crate::components::quiz_list::QuizList;

#[component]
pub fn QuizzesPage() -> impl IntoView {
    let refresh = RwSignal::new(0_u32);
    let on_created = Callback::new(move |()| refresh.update(|n| *n = n.wrapping_add(1)));

    view! {
        <div class="quizzes-page">
            <h1>"Quizzes"</h1>
            <CreateQuiz on_created=on_created />
            <QuizList refresh=refresh />
        </div>
    }
}
