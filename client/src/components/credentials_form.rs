//! Username/password form shared by the sign-up and login pages.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;

use crate::net::types::Credentials;

pub const CREDENTIALS_REQUIRED: &str = "Please enter a username and password.";

/// Credentials exactly as typed, or `None` when either field is blank.
pub fn collect_credentials(username: &str, password: &str) -> Option<Credentials> {
    if username.trim().is_empty() || password.is_empty() {
        return None;
    }
    Some(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn CredentialsForm(
    title: &'static str,
    submit_label: &'static str,
    /// Status line under the form; owned by the page so async results can set it.
    message: RwSignal<String>,
    busy: RwSignal<bool>,
    on_submit: Callback<Credentials>,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(credentials) = collect_credentials(&username.get(), &password.get()) else {
            message.set(CREDENTIALS_REQUIRED.to_owned());
            return;
        };
        message.set(String::new());
        on_submit.run(credentials);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{title}</h1>
                <form class="auth-form" on:submit=submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
