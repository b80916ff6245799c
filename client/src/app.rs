//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};
use map::consts::{LEAFLET_CSS, LEAFLET_JS};

use crate::pages::{login::LoginPage, quizzes::QuizzesPage, signup::SignupPage};
use crate::util::auth::install_landing_redirect;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Leaflet is loaded as a classic script ahead of the WASM bundle so the
/// global `L` exists by the time a map mounts.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Quiz Map"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Landing/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("quizzes") view=QuizzesPage/>
            </Routes>
        </Router>
    }
}

/// `/`: forwards to the quiz list or sign-up depending on the stored token.
#[component]
fn Landing() -> impl IntoView {
    install_landing_redirect(use_navigate());
    view! { <p class="landing">"Loading..."</p> }
}
