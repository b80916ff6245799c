use super::*;

#[test]
fn landing_goes_to_quizzes_with_token() {
    assert_eq!(landing_path(true), "/quizzes");
}

#[test]
fn landing_goes_to_signup_without_token() {
    assert_eq!(landing_path(false), "/signup");
}

#[test]
fn login_redirects_only_when_authenticated() {
    assert_eq!(login_redirect(true), Some("/quizzes"));
    assert_eq!(login_redirect(false), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_stored_token_keeps_root_on_signup() {
    use crate::util::session::{SessionTokens, has_token};
    assert_eq!(landing_path(has_token(&SessionTokens)), SIGNUP_ROUTE);
}
