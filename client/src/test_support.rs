//! In-memory stand-ins for the browser used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::net::http::{ApiError, ApiRequest, ApiResponse, Transport};
use crate::util::session::TokenStore;

pub use futures::executor::block_on;

/// Transport that records every request and replays scripted responses in order.
///
/// Once the script runs out every further request fails with a network error.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    pub fn respond_text(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Token store backed by a plain cell.
#[derive(Default)]
pub struct MemoryTokens {
    token: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokens {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }
}
