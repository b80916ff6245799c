//! Sign-up page. A created account continues to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::credentials_form::CredentialsForm;
use crate::net::types::Credentials;
use crate::util::auth::install_pending_navigation;

#[component]
pub fn SignupPage() -> impl IntoView {
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let pending_nav = RwSignal::new(None::<&'static str>);
    install_pending_navigation(pending_nav, use_navigate());

    let on_submit = Callback::new(move |credentials: Credentials| {
        busy.set(true);
        message.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::GlooTransport::default();
            match crate::net::api::signup(&transport, &credentials).await {
                Ok(_) => {
                    message.set(String::new());
                    pending_nav.set(Some(crate::util::auth::LOGIN_ROUTE));
                }
                Err(err) => {
                    leptos::logging::warn!("signup failed: {err}");
                    message.set(crate::net::api::auth_error_message("Sign-up", &err));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    });

    view! {
        <CredentialsForm title="Create Account" submit_label="Sign Up" message=message busy=busy on_submit=on_submit />
        <p class="auth-switch">
            "Already have an account? "
            <a href="/login">"Log in"</a>
        </p>
    }
}
