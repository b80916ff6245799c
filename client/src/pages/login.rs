//! Login page. Stores the issued token and continues to `/quizzes`.
//!
//! Visitors who already hold a token never see the form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::credentials_form::CredentialsForm;
use crate::net::types::Credentials;
use crate::util::auth::{install_login_redirect, install_pending_navigation};

#[component]
pub fn LoginPage() -> impl IntoView {
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let checked = RwSignal::new(false);
    let pending_nav = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    install_login_redirect(navigate.clone(), checked);
    install_pending_navigation(pending_nav, navigate);

    let on_submit = Callback::new(move |credentials: Credentials| {
        busy.set(true);
        message.set("Logging in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::GlooTransport::default();
            let store = crate::util::session::SessionTokens;
            match crate::net::api::complete_login(&transport, &store, &credentials).await {
                Ok(()) => {
                    message.set(String::new());
                    pending_nav.set(Some(crate::util::auth::QUIZZES_ROUTE));
                }
                Err(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    message.set(crate::net::api::auth_error_message("Login", &err));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    });

    view! {
        <Show when=move || checked.get()>
            <CredentialsForm title="Log In" submit_label="Log In" message=message busy=busy on_submit=on_submit />
            <p class="auth-switch">
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </Show>
    }
}
