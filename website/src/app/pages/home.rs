use common::DASHBOARD_ROUTE;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 px-6">
            <h1 class="text-4xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                "Portfolio"
            </h1>
            <p class="mt-4 text-slate-300">"Projects, tools and experiments."</p>
            <A
                href=DASHBOARD_ROUTE
                attr:class="mt-8 bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg transition-all duration-300"
            >
                "Open Dashboard"
            </A>
        </div>
    }
}
