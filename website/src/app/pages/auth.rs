use crate::security::sign_in_url;
use leptos::prelude::*;

/// Landing page for signed out visitors. Sign in itself is handled by the proxy.
#[component]
pub fn AuthPage() -> impl IntoView {
    let sign_in = Resource::new(|| (), |_| sign_in_url());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 px-6">
            <div class="w-full max-w-sm bg-white/10 backdrop-blur-md border border-white/20 rounded-2xl p-8 text-center animate-scale-in">
                <h2 class="text-2xl font-bold text-white">"Sign in to your account"</h2>
                <p class="mt-2 text-slate-300 text-sm">
                    "The dashboard is only available to the site owner."
                </p>
                <Transition fallback=move || {
                    view! { <p class="mt-6 text-slate-400">"Loading ..."</p> }
                }>
                    {move || Suspend::new(async move {
                        let href = sign_in.await.unwrap_or_else(|_| "/".to_string());
                        view! {
                            <a
                                href=href
                                rel="external"
                                class="mt-6 inline-block w-full bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg transition-all duration-300"
                            >
                                "Sign in"
                            </a>
                        }
                    })}
                </Transition>
            </div>
        </div>
    }
}
