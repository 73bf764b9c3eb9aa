//! Registration Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::session::SessionState;

/// Minimum accepted password length
pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Validate a new password against its confirmation. Returns the inline
/// error message to display, or `Ok` when acceptable. Checked before any
/// network call is issued.
pub(crate) fn validate_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

/// Registration form for new accounts
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        if let Err(msg) = validate_password(&password.get(), &confirm.get()) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        set_loading.set(true);

        let username = username.get();
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            match api::auth::register(&username, &email, &password).await {
                Ok(auth) => {
                    // Registration signs the user in; the route gate takes
                    // them to /map
                    session.login(auth.user, auth.token);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let clear_error = move || set_error.set(None);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4 py-8">
            <div class="w-full max-w-md">
                // Logo
                <div class="text-center mb-8">
                    <A href="/" class="inline-flex items-center space-x-2">
                        <span class="text-3xl">"📍"</span>
                        <h1 class="text-3xl font-bold text-white">"KritPokeMap"</h1>
                    </A>
                </div>

                <div class="bg-gray-800 rounded-xl shadow-xl p-8">
                    <h2 class="text-2xl font-bold mb-2 text-center">"Create Your Account"</h2>
                    <p class="text-center text-gray-400 mb-6">"Start your 7-day free trial"</p>

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
                                placeholder="Choose a username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    clear_error();
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                            <input
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    clear_error();
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                            <input
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    clear_error();
                                }
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Confirm Password"</label>
                            <input
                                type="password"
                                placeholder="Re-enter your password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| {
                                    set_confirm.set(event_target_value(&ev));
                                    clear_error();
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
                            {move || if loading.get() { "Creating Account..." } else { "Start Free Trial" }}
                        </button>
                    </form>

                    <div class="mt-6 text-center text-gray-400">
                        "Already have an account? "
                        <A href="/login" class="font-semibold text-primary-400 hover:text-primary-300">
                            "Login here"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_password_accepts_matching_pair() {
        assert!(validate_password("pikachu1", "pikachu1").is_ok());
    }

    #[test]
    fn test_validate_password_rejects_mismatch() {
        assert_eq!(
            validate_password("pikachu1", "raichu22"),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn test_validate_password_rejects_short() {
        assert_eq!(
            validate_password("pika", "pika"),
            Err("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn test_mismatch_reported_before_length() {
        assert_eq!(
            validate_password("abc", "abcd"),
            Err("Passwords do not match")
        );
    }
}
