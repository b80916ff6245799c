//! Quiz-list state for the quizzes page.
//!
//! DESIGN
//! ======
//! Load errors and action errors are kept apart: a failed load replaces the
//! list with an error view, while a failed delete leaves the list on screen
//! and shows its message above it.

#[cfg(test)]
#[path = "quizzes_test.rs"]
mod quizzes_test;

use crate::net::types::{Question, Quiz, QuizKey};

/// Loaded quizzes plus the at-most-one expanded entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizListState {
    pub items: Vec<Quiz>,
    pub loading: bool,
    pub error: Option<String>,
    pub action_error: Option<String>,
    pub selected: Option<QuizKey>,
}

impl Default for QuizListState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, action_error: None, selected: None }
    }
}

impl QuizListState {
    pub fn load_succeeded(&mut self, items: Vec<Quiz>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// A failed load never populates the list.
    pub fn load_failed(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message);
    }

    /// Expand `key`, or collapse it when it is already expanded.
    pub fn toggle_select(&mut self, key: &QuizKey) {
        if self.selected.as_ref() == Some(key) {
            self.selected = None;
        } else {
            self.selected = Some(key.clone());
        }
    }

    pub fn is_selected(&self, key: &QuizKey) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Questions of the expanded quiz, empty when nothing is expanded.
    pub fn selected_questions(&self) -> Vec<Question> {
        self.selected
            .as_ref()
            .and_then(|key| self.items.iter().find(|quiz| quiz.key() == *key))
            .map(|quiz| quiz.questions.clone())
            .unwrap_or_default()
    }

    /// Drop a deleted quiz. Also collapses the expanded entry.
    pub fn remove(&mut self, key: &QuizKey) {
        self.items.retain(|quiz| quiz.key() != *key);
        self.selected = None;
        self.action_error = None;
    }

    pub fn delete_failed(&mut self, message: &str) {
        self.action_error = Some(message.to_owned());
    }
}
