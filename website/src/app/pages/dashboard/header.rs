use crate::app::components::icons::{LogOutIcon, PlusIcon};
use leptos::prelude::*;

const BUTTON_CLASS: &str = "text-white px-4 py-2 rounded-lg transition-all duration-300 flex items-center space-x-2 hover:scale-105 transform";

#[component]
pub fn DashboardHeader(
    email: Signal<String>,
    on_add: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-md border-b border-white/20 animate-scale-in">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-4">
                    <div class="text-3xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent animate-pulse">
                        "Portfolio"
                    </div>
                    <div class="border-l border-white/30 pl-4">
                        <h1 class="text-2xl font-bold text-white">"Project Dashboard"</h1>
                        <p class="text-slate-300 text-sm">"Welcome back, " {email}</p>
                    </div>
                </div>
                <div class="flex items-center space-x-4">
                    <button
                        class=format!("bg-blue-600 hover:bg-blue-700 {BUTTON_CLASS}")
                        on:click=move |_| on_add.run(())
                    >
                        <PlusIcon />
                        <span>"Add Project"</span>
                    </button>
                    <button
                        class=format!("bg-red-600 hover:bg-red-700 {BUTTON_CLASS}")
                        on:click=move |_| on_logout.run(())
                    >
                        <LogOutIcon />
                        <span>"Logout"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
