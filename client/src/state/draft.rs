//! Quiz-creation form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! A quiz is built locally as a list of question drafts and only sent to the
//! API on submit. The location inputs are filled by clicking the map or by
//! typing coordinates; both paths end in the same string fields.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::api::SubmitReport;
use crate::net::types::{Location, Question};

pub const FILL_ALL_FIELDS: &str = "Please fill out all question fields.";
pub const NAME_REQUIRED: &str = "Please enter a quiz name.";
pub const QUESTIONS_REQUIRED: &str = "Please add at least one question to the quiz.";
pub const LOGIN_REQUIRED: &str = "You must be logged in to create a quiz.";

/// Editable state behind the create-quiz form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizDraft {
    pub name: String,
    pub question: String,
    pub answer: String,
    pub location: Location,
    pub questions: Vec<Question>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
}

impl QuizDraft {
    /// Fill the location inputs from a map click.
    pub fn set_location(&mut self, latitude: String, longitude: String) {
        self.location = Location { latitude, longitude };
    }

    /// Append the current inputs as a draft question.
    ///
    /// Returns `false` and sets the fill-all-fields error when any of the four
    /// inputs is empty.
    pub fn add_question(&mut self) -> bool {
        if self.question.is_empty() || self.answer.is_empty() || !self.location.is_complete() {
            self.error = Some(FILL_ALL_FIELDS.to_owned());
            return false;
        }
        self.questions.push(Question {
            question: std::mem::take(&mut self.question),
            answer: std::mem::take(&mut self.answer),
            location: std::mem::take(&mut self.location),
        });
        self.error = None;
        true
    }

    /// Validate for submission and return what to send.
    ///
    /// Clears any previous messages first. On failure the error is set and
    /// `None` returned; on success the draft is marked as submitting.
    pub fn begin_submit(&mut self) -> Option<(String, Vec<Question>)> {
        self.error = None;
        self.success = None;
        if self.name.is_empty() {
            self.error = Some(NAME_REQUIRED.to_owned());
            return None;
        }
        if self.questions.is_empty() {
            self.error = Some(QUESTIONS_REQUIRED.to_owned());
            return None;
        }
        self.submitting = true;
        Some((self.name.clone(), self.questions.clone()))
    }

    /// The quiz exists server-side: report it and reset name and drafts.
    pub fn submit_succeeded(&mut self, report: &SubmitReport) {
        let mut message = format!("Quiz created successfully with ID: {}", report.quiz_id);
        if !report.is_complete() {
            let failed = report.failed.len();
            let noun = if failed == 1 { "question" } else { "questions" };
            message.push_str(&format!(" ({failed} {noun} could not be added)"));
        }
        self.success = Some(message);
        self.error = None;
        self.name.clear();
        self.questions.clear();
        self.submitting = false;
    }

    /// Creation failed: show `message` and keep everything for a retry.
    pub fn submit_failed(&mut self, message: String) {
        self.error = Some(message);
        self.success = None;
        self.submitting = false;
    }
}
