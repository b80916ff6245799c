//! Remote quiz API operations.
//!
//! Every operation is generic over [`Transport`] so the browser build sends
//! real requests while tests drive the same code against a recorder.
//!
//! ERROR HANDLING
//! ==============
//! Operations return [`ApiError`]; the `*_message` helpers turn those into
//! the strings shown by forms. The one place errors are swallowed is the
//! question-attach loop in [`submit_quiz`]: each failure is logged and
//! recorded in the [`SubmitReport`] but never aborts the remaining attaches.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::logging::{log, warn};

use super::http::{ApiError, ApiRequest, Transport};
use super::types::{
    AttachQuestionRequest, CreateQuizRequest, CreateQuizResponse, Credentials, LoginResponse, Question, Quiz,
};
use crate::util::session::TokenStore;

pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGIN_PATH: &str = "/auth/login";
pub const QUIZ_PATH: &str = "/quiz";
pub const QUESTION_PATH: &str = "/quiz/question";

pub const FETCH_FAILED: &str = "Failed to fetch quizzes";
pub const UNEXPECTED_FORMAT: &str = "Unexpected data format";
pub const CREATE_FAILED: &str = "Failed to create quiz";
pub const ATTACH_FAILED: &str = "Failed to add question";
pub const NOT_AUTHENTICATED: &str = "User is not authenticated. No token found.";
pub const UNAUTHORIZED: &str = "Unauthorized: Check your token and permissions";
pub const FORBIDDEN: &str = "Forbidden: You do not have permission to delete this quiz";
pub const DELETE_FAILED: &str = "Failed to delete quiz";

fn quiz_endpoint(quiz_id: &str) -> String {
    format!("{QUIZ_PATH}/{quiz_id}")
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/signup`. The success body is returned as-is.
///
/// # Errors
///
/// Transport failures, non-OK statuses, and non-JSON bodies.
pub async fn signup<T: Transport>(transport: &T, credentials: &Credentials) -> Result<serde_json::Value, ApiError> {
    let resp = transport
        .send(ApiRequest::post(SIGNUP_PATH, to_json(credentials)?))
        .await?
        .error_for_status()?;
    let body: serde_json::Value = resp.json()?;
    log!("signup response: {body}");
    Ok(body)
}

/// `POST /auth/login`, returning the issued bearer token.
///
/// # Errors
///
/// Transport failures, non-OK statuses, and bodies without a non-empty token.
pub async fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<String, ApiError> {
    let resp = transport
        .send(ApiRequest::post(LOGIN_PATH, to_json(credentials)?))
        .await?
        .error_for_status()?;
    let body: LoginResponse = resp.json()?;
    if body.token.is_empty() {
        return Err(ApiError::Decode("login response has an empty token".to_owned()));
    }
    Ok(body.token)
}

/// Log in and persist the token in `store`.
///
/// # Errors
///
/// Same as [`login`]; nothing is stored on failure.
pub async fn complete_login<T: Transport, S: TokenStore>(
    transport: &T,
    store: &S,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    let token = login(transport, credentials).await?;
    store.set_token(&token);
    Ok(())
}

/// Text shown under the sign-up/login forms when a submission fails.
pub fn auth_error_message(action: &str, err: &ApiError) -> String {
    match err.server_message() {
        Some(message) => format!("{action} failed: {message}"),
        None => format!("{action} failed: {err}"),
    }
}

// =============================================================================
// QUIZ LIST
// =============================================================================

/// `GET /quiz`. The body must carry a `quizzes` array.
///
/// Entries that do not decode are logged and skipped; the rest are kept.
///
/// # Errors
///
/// Non-OK statuses and bodies whose `quizzes` is missing or not an array.
pub async fn fetch_quizzes<T: Transport>(transport: &T) -> Result<Vec<Quiz>, ApiError> {
    let resp = transport.send(ApiRequest::get(QUIZ_PATH)).await?.error_for_status()?;
    let mut body: serde_json::Value = resp.json()?;
    let Some(serde_json::Value::Array(entries)) = body.get_mut("quizzes").map(serde_json::Value::take) else {
        return Err(ApiError::Decode(UNEXPECTED_FORMAT.to_owned()));
    };
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Quiz>(entry) {
            Ok(quiz) => Some(quiz),
            Err(err) => {
                warn!("skipping malformed quiz at index {index}: {err}");
                None
            }
        })
        .collect())
}

/// Error text for a failed quiz list load.
pub fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Decode(_) => UNEXPECTED_FORMAT.to_owned(),
        _ => FETCH_FAILED.to_owned(),
    }
}

// =============================================================================
// QUIZ CREATION
// =============================================================================

/// `POST /quiz`, returning the server-assigned quiz ID.
///
/// # Errors
///
/// Non-OK statuses (with the server's `error` text) and bodies without `quizId`.
pub async fn create_quiz<T: Transport>(transport: &T, token: &str, name: &str) -> Result<String, ApiError> {
    let body = to_json(&CreateQuizRequest { name: name.to_owned() })?;
    let resp = transport
        .send(ApiRequest::post(QUIZ_PATH, body).with_bearer(token))
        .await?
        .error_for_status()?;
    let created: CreateQuizResponse = resp.json()?;
    Ok(created.quiz_id)
}

/// Error text for a failed quiz creation: the server's message when it sent one.
pub fn create_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(CREATE_FAILED).to_owned()
}

/// `POST /quiz/question` for one question of `quiz_id`.
///
/// # Errors
///
/// Transport failures and non-OK statuses.
pub async fn attach_question<T: Transport>(
    transport: &T,
    token: &str,
    quiz_id: &str,
    question: &Question,
) -> Result<(), ApiError> {
    let body = to_json(&AttachQuestionRequest::new(quiz_id, question))?;
    transport
        .send(ApiRequest::post(QUESTION_PATH, body).with_bearer(token))
        .await?
        .error_for_status()?;
    Ok(())
}

/// Error text recorded for a question that could not be attached.
pub fn attach_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Status { .. } => ATTACH_FAILED.to_owned(),
        other => other.to_string(),
    }
}

/// A question that failed to attach during [`submit_quiz`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedQuestion {
    /// Position in the submitted draft list.
    pub index: usize,
    pub message: String,
}

/// Outcome of a quiz submission whose quiz was created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReport {
    pub quiz_id: String,
    pub attached: usize,
    pub failed: Vec<FailedQuestion>,
}

impl SubmitReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create a quiz, then attach each question in order, one request at a time.
///
/// Not transactional: the quiz exists server-side as soon as the first call
/// succeeds, and any attach failure leaves it with a partial question set.
///
/// # Errors
///
/// Only a failed quiz creation is an error. Attach failures are reported in
/// [`SubmitReport::failed`].
pub async fn submit_quiz<T: Transport>(
    transport: &T,
    token: &str,
    name: &str,
    questions: &[Question],
) -> Result<SubmitReport, ApiError> {
    let quiz_id = create_quiz(transport, token, name).await?;
    let mut report = SubmitReport { quiz_id, attached: 0, failed: Vec::new() };

    for (index, question) in questions.iter().enumerate() {
        match attach_question(transport, token, &report.quiz_id, question).await {
            Ok(()) => report.attached += 1,
            Err(err) => {
                let message = attach_error_message(&err);
                warn!("Error adding question {index} to quiz {}: {message}", report.quiz_id);
                report.failed.push(FailedQuestion { index, message });
            }
        }
    }

    Ok(report)
}

// =============================================================================
// QUIZ DELETION
// =============================================================================

/// `DELETE /quiz/{id}`. Without a token no request is sent.
///
/// # Errors
///
/// [`ApiError::MissingToken`] when `token` is absent or empty; otherwise
/// transport failures and non-OK statuses.
pub async fn delete_quiz<T: Transport>(transport: &T, token: Option<&str>, quiz_id: &str) -> Result<(), ApiError> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Err(ApiError::MissingToken);
    };
    let resp = transport.send(ApiRequest::delete(quiz_endpoint(quiz_id)).with_bearer(token)).await?;
    if !resp.ok() {
        warn!("Error: {} deleting quiz {quiz_id}: {}", resp.status, resp.body);
    }
    resp.error_for_status()?;
    Ok(())
}

/// Error text for a failed deletion.
pub fn delete_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::MissingToken => NOT_AUTHENTICATED,
        ApiError::Status { status: 401, .. } => UNAUTHORIZED,
        ApiError::Status { status: 403, .. } => FORBIDDEN,
        _ => DELETE_FAILED,
    }
}
