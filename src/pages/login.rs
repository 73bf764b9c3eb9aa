//! Login Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::session::SessionState;

/// Login form for existing accounts
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);

        let username = username.get();
        let password = password.get();
        spawn_local(async move {
            match api::auth::login(&username, &password).await {
                Ok(auth) => {
                    // The anonymous-only route gate redirects to /map once
                    // the session signal flips
                    session.login(auth.user, auth.token);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4">
            <div class="w-full max-w-md">
                // Logo
                <div class="text-center mb-8">
                    <A href="/" class="inline-flex items-center space-x-2">
                        <span class="text-3xl">"📍"</span>
                        <h1 class="text-3xl font-bold text-white">"KritPokeMap"</h1>
                    </A>
                </div>

                <div class="bg-gray-800 rounded-xl shadow-xl p-8">
                    <h2 class="text-2xl font-bold mb-6 text-center">"Login to Your Account"</h2>

                    {move || {
                        error.get().map(|msg| view! {
                            <div class="mb-4 p-3 bg-red-900/40 border border-red-700 rounded-md text-red-300 text-sm">
                                {msg}
                            </div>
                        })
                    }}

                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                            <input
                                type="text"
                                placeholder="Enter your username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_error.set(None);
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                            <input
                                type="password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error.set(None);
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg py-3 font-semibold transition-colors"
                        >
                            {move || if loading.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>

                    <div class="mt-6 text-center text-gray-400">
                        "Don't have an account? "
                        <A href="/register" class="font-semibold text-primary-400 hover:text-primary-300">
                            "Register here"
                        </A>
                    </div>
                </div>

                <div class="mt-6 text-center">
                    <A href="/" class="text-gray-400 hover:text-white">
                        "← Back to Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
