//! Wire DTOs for the remote quiz API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Coordinates stay strings end
//! to end; they are only parsed when a marker is placed on the map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair posted to the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A map position as carried by the API (decimal degrees in string form).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

impl Location {
    /// True when both coordinates are filled in.
    pub fn is_complete(&self) -> bool {
        !self.latitude.is_empty() && !self.longitude.is_empty()
    }
}

/// A question/answer pair pinned to a location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
    pub location: Location,
}

impl Question {
    /// Convert into the map crate's pin representation.
    pub fn to_pin(&self) -> map::markers::QuestionPin {
        map::markers::QuestionPin {
            question: self.question.clone(),
            answer: self.answer.clone(),
            latitude: self.location.latitude.clone(),
            longitude: self.location.longitude.clone(),
        }
    }
}

/// A quiz as listed by `GET /quiz`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Identity of a listed quiz. Quiz IDs are only unique per owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuizKey {
    pub quiz_id: String,
    pub user_id: String,
}

impl Quiz {
    pub fn key(&self) -> QuizKey {
        QuizKey { quiz_id: self.quiz_id.clone(), user_id: self.user_id.clone() }
    }
}

/// `POST /auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /quiz` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateQuizRequest {
    pub name: String,
}

/// `POST /quiz` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizResponse {
    pub quiz_id: String,
}

/// `POST /quiz/question` request body. `name` carries the quiz ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttachQuestionRequest {
    pub name: String,
    pub question: String,
    pub answer: String,
    pub location: Location,
}

impl AttachQuestionRequest {
    pub fn new(quiz_id: &str, question: &Question) -> Self {
        Self {
            name: quiz_id.to_owned(),
            question: question.question.clone(),
            answer: question.answer.clone(),
            location: question.location.clone(),
        }
    }
}

/// Error body some endpoints return alongside a non-OK status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
