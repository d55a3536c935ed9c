pub mod components;
pub mod pages;
pub mod providers;

use crate::app::pages::auth::AuthPage;
use crate::app::pages::dashboard::DashboardPage;
use crate::app::pages::home::HomePage;
use crate::app::pages::GlobalState;
use crate::app::providers::provide_auth;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use reactive_stores::Store;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html class="h-full bg-slate-900" lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="h-full">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    #[cfg(feature = "ssr")]
    crate::security::ssr::set_headers();

    provide_context(Store::new(GlobalState::default()));
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/website.css" />

        <Title text="Project Dashboard" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("auth") view=AuthPage />
                    <Route path=path!("dashboard") view=DashboardPage />
                </Routes>
            </main>
        </Router>
    }
}
