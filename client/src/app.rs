//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::LoginConfig;
use crate::i18n::{Language, Translator};
use crate::pages::{landing::AppLanding, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
///
/// Renders in English on the server and switches to the browser language
/// after hydration, so server and client markup agree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let i18n = RwSignal::new(Translator::default());
    provide_context(i18n);
    provide_context(LoginConfig::default());

    Effect::new(move || {
        let detected = Translator::new(Language::detect());
        if i18n.get_untracked() != detected {
            i18n.set(detected);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/login.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("app") view=AppLanding/>
            </Routes>
        </Router>
    }
}
