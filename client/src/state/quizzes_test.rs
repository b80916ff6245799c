use super::*;
use crate::net::api::{FORBIDDEN, UNEXPECTED_FORMAT};
use crate::net::types::{Location, QuizKey};

fn quiz(id: &str, questions: &[&str]) -> Quiz {
    owned_quiz(id, "u1", questions)
}

fn owned_quiz(id: &str, user_id: &str, questions: &[&str]) -> Quiz {
    Quiz {
        quiz_id: id.to_owned(),
        user_id: user_id.to_owned(),
        username: format!("user-{user_id}"),
        questions: questions
            .iter()
            .map(|q| Question {
                question: (*q).to_owned(),
                answer: "a".to_owned(),
                location: Location { latitude: "1".to_owned(), longitude: "2".to_owned() },
            })
            .collect(),
    }
}

fn key(id: &str) -> QuizKey {
    QuizKey { quiz_id: id.to_owned(), user_id: "u1".to_owned() }
}

fn loaded(items: Vec<Quiz>) -> QuizListState {
    let mut state = QuizListState::default();
    state.load_succeeded(items);
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = QuizListState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state.selected, None);
}

#[test]
fn load_succeeded_populates_items() {
    let state = loaded(vec![quiz("q1", &["a"]), quiz("q2", &[])]);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn load_failed_never_populates() {
    let mut state = QuizListState::default();
    state.load_failed(UNEXPECTED_FORMAT.to_owned());
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some(UNEXPECTED_FORMAT));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_select_expands_then_collapses() {
    let mut state = loaded(vec![quiz("q1", &["a"])]);
    state.toggle_select(&key("q1"));
    assert!(state.is_selected(&key("q1")));
    state.toggle_select(&key("q1"));
    assert_eq!(state.selected, None);
}

#[test]
fn toggle_select_switches_between_quizzes() {
    let mut state = loaded(vec![quiz("q1", &["a"]), quiz("q2", &["b"])]);
    state.toggle_select(&key("q1"));
    state.toggle_select(&key("q2"));
    assert!(state.is_selected(&key("q2")));
    assert!(!state.is_selected(&key("q1")));
}

#[test]
fn selected_questions_follow_selection() {
    let mut state = loaded(vec![quiz("q1", &["a", "b"]), quiz("q2", &["c"])]);
    assert!(state.selected_questions().is_empty());

    state.toggle_select(&key("q1"));
    let names: Vec<String> = state.selected_questions().into_iter().map(|q| q.question).collect();
    assert_eq!(names, ["a", "b"]);
}

// =============================================================
// Deletion
// =============================================================

#[test]
fn remove_drops_quiz_and_clears_selection() {
    let mut state = loaded(vec![quiz("q1", &["a"]), quiz("q2", &["b"])]);
    state.toggle_select(&key("q2"));
    state.remove(&key("q1"));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].quiz_id, "q2");
    assert_eq!(state.selected, None);
}

#[test]
fn delete_failed_keeps_list_visible() {
    let mut state = loaded(vec![quiz("q1", &["a"])]);
    state.delete_failed(FORBIDDEN);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
    assert_eq!(state.action_error.as_deref(), Some(FORBIDDEN));
}

#[test]
fn remove_clears_previous_action_error() {
    let mut state = loaded(vec![quiz("q1", &["a"]), quiz("q2", &[])]);
    state.delete_failed(FORBIDDEN);
    state.remove(&key("q2"));
    assert_eq!(state.action_error, None);
}

// =============================================================
// Identity across owners
// =============================================================

fn shared_id_list() -> QuizListState {
    loaded(vec![owned_quiz("Trivia", "alice", &["alice-q"]), owned_quiz("Trivia", "bob", &["bob-q"])])
}

#[test]
fn same_quiz_id_from_two_owners_are_distinct_keys() {
    let state = shared_id_list();
    assert_ne!(state.items[0].key(), state.items[1].key());
}

#[test]
fn selecting_one_owner_does_not_expand_the_other() {
    let mut state = shared_id_list();
    let bob = state.items[1].key();
    state.toggle_select(&bob);

    assert!(state.is_selected(&bob));
    assert!(!state.is_selected(&state.items[0].key()));
    let names: Vec<String> = state.selected_questions().into_iter().map(|q| q.question).collect();
    assert_eq!(names, ["bob-q"]);
}

#[test]
fn remove_only_drops_the_matching_owner() {
    let mut state = shared_id_list();
    let alice = state.items[0].key();
    state.remove(&alice);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].user_id, "bob");
}
