use super::*;

// =============================================================
// api_base
// =============================================================

#[test]
fn resolve_api_base_defaults_to_remote_host() {
    assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
}

#[test]
fn resolve_api_base_ignores_blank_override() {
    assert_eq!(resolve_api_base(Some("   ")), DEFAULT_API_BASE);
}

#[test]
fn resolve_api_base_strips_trailing_slash() {
    assert_eq!(resolve_api_base(Some("http://localhost:8080/")), "http://localhost:8080");
}

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn response_ok_covers_2xx_only() {
    assert!(ApiResponse::new(200, "").ok());
    assert!(ApiResponse::new(204, "").ok());
    assert!(!ApiResponse::new(199, "").ok());
    assert!(!ApiResponse::new(301, "").ok());
    assert!(!ApiResponse::new(403, "").ok());
}

#[test]
fn response_error_message_reads_error_field() {
    let resp = ApiResponse::new(400, r#"{"error":"name taken"}"#);
    assert_eq!(resp.error_message().as_deref(), Some("name taken"));
}

#[test]
fn response_error_message_none_for_non_json() {
    assert_eq!(ApiResponse::new(500, "Internal Server Error").error_message(), None);
}

#[test]
fn error_for_status_passes_success_through() {
    let resp = ApiResponse::new(201, "{}");
    assert_eq!(resp.clone().error_for_status(), Ok(resp));
}

#[test]
fn error_for_status_carries_server_message() {
    let err = ApiResponse::new(403, r#"{"error":"nope"}"#).error_for_status().unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.server_message(), Some("nope"));
}

#[test]
fn json_decode_failure_is_decode_error() {
    let err = ApiResponse::new(200, "not json").json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// ApiRequest
// =============================================================

#[test]
fn with_bearer_sets_token() {
    let req = ApiRequest::delete("/quiz/1").with_bearer("tok");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.bearer.as_deref(), Some("tok"));
    assert_eq!(req.body, None);
}

#[test]
fn api_error_display_is_readable() {
    assert_eq!(ApiError::MissingToken.to_string(), "not authenticated");
    assert_eq!(
        ApiError::Status { status: 500, message: None }.to_string(),
        "request failed with status 500"
    );
}

// =============================================================
// request_headers
// =============================================================

#[test]
fn get_without_body_has_no_content_type() {
    let headers = request_headers(&ApiRequest::get("/quiz"));
    assert_eq!(headers, [("Accept", "application/json")]);
}

#[test]
fn post_with_body_declares_json() {
    let req = ApiRequest::post("/quiz", serde_json::json!({ "name": "Trivia" })).with_bearer("tok");
    let headers = request_headers(&req);
    assert!(headers.contains(&("Content-Type", "application/json")));
    assert!(headers.contains(&("Accept", "application/json")));
}

#[test]
fn delete_keeps_json_content_type() {
    let headers = request_headers(&ApiRequest::delete("/quiz/q1"));
    assert!(headers.contains(&("Content-Type", "application/json")));
}
