//! Map Page
//!
//! The main authenticated view: interactive sighting map with a type filter,
//! the report modal, the chat panel, and the sighting detail card. Owns the
//! polling synchronizer for its lifetime; the poller restarts whenever the
//! type filter changes so the new filter applies immediately.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::report_modal::TYPE_OPTIONS;
use crate::components::{ChatPanel, MapView, ReportModal};
use crate::pages::confirm;
use crate::pages::register::validate_password;
use crate::state::global::{format_timestamp, GlobalState, Sighting};
use crate::state::session::SessionState;
use crate::state::sync::{self, Poller, SIGHTING_WINDOW_HOURS};

/// Authenticated map view
#[component]
pub fn MapPage() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (show_report, set_show_report) = create_signal(false);
    let (show_chat, set_show_chat) = create_signal(false);
    let (show_password, set_show_password) = create_signal(false);
    let selected_location = create_rw_signal(None::<(f64, f64)>);
    let selected_sighting = create_rw_signal(None::<Sighting>);

    // Poll while this page is mounted. Reading filter_type inside the effect
    // restarts the poller (with an immediate tick) on every filter change.
    let poller = Poller::new();
    let poller_for_effect = poller.clone();
    create_effect(move |_| {
        let _ = state.filter_type.get();
        poller_for_effect.start(move || sync::refresh_all(state));
    });
    let poller_for_cleanup = poller;
    on_cleanup(move || poller_for_cleanup.stop());

    let filter_type = state.filter_type;
    let sightings = state.sightings;

    let username = move || {
        session
            .current()
            .map(|s| s.user.username)
            .unwrap_or_default()
    };
    let is_admin = move || session.current().map(|s| s.user.is_admin()).unwrap_or(false);

    let close_report = move || {
        set_show_report.set(false);
        selected_location.set(None);
    };

    view! {
        <div class="h-screen flex flex-col bg-gray-900 text-white">
            // Header
            <header class="border-b border-gray-700 bg-gray-800 z-20">
                <div class="px-4 py-3 flex justify-between items-center">
                    <div class="flex items-center space-x-2">
                        <span class="text-xl">"📍"</span>
                        <h1 class="text-xl font-bold">"KritPokeMap"</h1>
                    </div>

                    <div class="flex items-center space-x-3">
                        <button
                            on:click=move |_| {
                                selected_sighting.set(None);
                                set_show_report.set(true);
                            }
                            class="px-3 py-2 rounded-lg bg-primary-600 hover:bg-primary-700
                                   text-sm font-medium transition-colors"
                        >
                            "➕ Report Sighting"
                        </button>

                        <button
                            on:click=move |_| set_show_chat.update(|open| *open = !*open)
                            class="px-3 py-2 rounded-lg border border-gray-600 hover:bg-gray-700
                                   text-sm transition-colors"
                        >
                            "💬 Chat"
                        </button>

                        <Show when=is_admin>
                            <A
                                href="/admin"
                                class="px-3 py-2 rounded-lg border border-gray-600 hover:bg-gray-700
                                       text-sm transition-colors"
                            >
                                "⚙️ Admin"
                            </A>
                        </Show>

                        <button
                            on:click=move |_| set_show_password.set(true)
                            title="Change password"
                            class="px-3 py-2 rounded-lg bg-gray-700 hover:bg-gray-600
                                   text-sm text-gray-300 transition-colors"
                        >
                            {username}
                        </button>

                        <button
                            on:click=move |_| session.logout()
                            class="px-3 py-2 rounded-lg text-sm text-gray-400 hover:text-white
                                   transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            // Map with overlays
            <main class="flex-1 relative flex">
                <div class="flex-1 relative">
                    <MapView
                        selecting=show_report
                        selected_location=selected_location
                        selected_sighting=selected_sighting
                    />

                    // Filter panel
                    <div class="absolute top-4 left-4 z-10 bg-gray-800/90 rounded-lg p-3 shadow-lg">
                        <select
                            on:change=move |ev| filter_type.set(event_target_value(&ev))
                            prop:value=move || filter_type.get()
                            class="bg-gray-700 rounded px-3 py-2 text-sm
                                   border border-gray-600 focus:outline-none"
                        >
                            <option value="">"All Types"</option>
                            {TYPE_OPTIONS.into_iter().map(|t| view! {
                                <option value=t>{t}</option>
                            }).collect_view()}
                        </select>
                        <p class="mt-2 text-xs text-gray-400">
                            {move || format!(
                                "Showing {} sightings (last {}h)",
                                sightings.get().len(),
                                SIGHTING_WINDOW_HOURS,
                            )}
                        </p>
                    </div>

                    <SightingCard selected_sighting=selected_sighting />
                </div>

                <Show when=move || show_chat.get()>
                    <ChatPanel on_close=move || set_show_chat.set(false) />
                </Show>
            </main>

            <Show when=move || show_report.get()>
                <ReportModal
                    selected_location=selected_location
                    on_close=close_report
                />
            </Show>

            <Show when=move || show_password.get()>
                <ChangePasswordModal on_close=move || set_show_password.set(false) />
            </Show>
        </div>
    }
}

/// Run a sighting action, then close the detail card, toast, and re-fetch
fn run_action<Fut>(
    state: GlobalState,
    selected_sighting: RwSignal<Option<Sighting>>,
    action: Fut,
    success: &'static str,
) where
    Fut: std::future::Future<Output = Result<(), String>> + 'static,
{
    spawn_local(async move {
        match action.await {
            Ok(()) => {
                selected_sighting.set(None);
                state.show_success(success);
                sync::refresh_sightings(&state).await;
            }
            Err(e) => state.show_error(&e),
        }
    });
}

/// Detail card for the selected sighting, with role-gated actions
#[component]
fn SightingCard(selected_sighting: RwSignal<Option<Sighting>>) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_admin = move || session.current().map(|s| s.user.is_admin()).unwrap_or(false);
    let is_owner = move |sighting: &Sighting| {
        session
            .current()
            .map(|s| s.user.username == sighting.reporter_username)
            .unwrap_or(false)
    };

    move || {
        selected_sighting.get().map(|sighting| {
            let id = sighting.id;
            let owner = is_owner(&sighting);

            view! {
                <div class="absolute bottom-4 left-4 z-10 bg-gray-800/95 rounded-lg p-4
                            shadow-lg w-72 border border-gray-700">
                    <div class="flex items-start justify-between">
                        <div>
                            <h3 class="font-bold text-lg">
                                {sighting.pokemon_name.clone()}
                                {sighting.is_verified.then(|| view! {
                                    <span class="ml-2 text-xs bg-green-700 rounded px-2 py-0.5">
                                        "✓ Verified"
                                    </span>
                                })}
                            </h3>
                            {sighting.pokemon_type.clone().map(|t| view! {
                                <p class="text-sm text-gray-400">{t}" type"</p>
                            })}
                        </div>
                        <button
                            on:click=move |_| selected_sighting.set(None)
                            class="text-gray-400 hover:text-white"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="mt-2 text-sm text-gray-400 space-y-1">
                        <p>"Reported by "{sighting.reporter_username.clone()}</p>
                        <p>{format_timestamp(&sighting.time_reported, "%Y-%m-%d %H:%M")}</p>
                        <p>{format!("{:.4}, {:.4}", sighting.latitude, sighting.longitude)}</p>
                    </div>

                    <div class="mt-3 flex flex-wrap gap-2">
                        <Show when=move || is_admin() && {
                            selected_sighting
                                .get()
                                .map(|s| !s.is_verified)
                                .unwrap_or(false)
                        }>
                            <button
                                on:click=move |_| {
                                    run_action(
                                        state,
                                        selected_sighting,
                                        api::sightings::verify(id),
                                        "Sighting verified",
                                    )
                                }
                                class="px-3 py-1 rounded bg-green-700 hover:bg-green-600
                                       text-sm transition-colors"
                            >
                                "Verify"
                            </button>
                        </Show>

                        <Show when=is_admin>
                            <button
                                on:click=move |_| {
                                    run_action(
                                        state,
                                        selected_sighting,
                                        api::sightings::deactivate(id),
                                        "Sighting deactivated",
                                    )
                                }
                                class="px-3 py-1 rounded bg-yellow-700 hover:bg-yellow-600
                                       text-sm transition-colors"
                            >
                                "Deactivate"
                            </button>
                        </Show>

                        <Show when=move || owner>
                            <button
                                on:click=move |_| {
                                    if confirm("Delete this sighting?") {
                                        run_action(
                                            state,
                                            selected_sighting,
                                            api::sightings::delete(id),
                                            "Sighting deleted",
                                        );
                                    }
                                }
                                class="px-3 py-1 rounded bg-red-700 hover:bg-red-600
                                       text-sm transition-colors"
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </div>
            }
        })
    }
}

/// Modal for changing the current account's password
#[component]
fn ChangePasswordModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (current, set_current) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        if let Err(msg) = validate_password(&new_password.get(), &confirm_password.get()) {
            set_error.set(Some(msg.to_string()));
            return;
        }

        set_saving.set(true);

        let current = current.get();
        let new_password = new_password.get();
        let close = on_close_for_submit.clone();
        spawn_local(async move {
            match api::auth::change_password(&current, &new_password).await {
                Ok(()) => {
                    set_current.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    close();
                    state.show_success("Password changed successfully!");
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Change Password"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                {move || {
                    error.get().map(|msg| view! {
                        <div class="mb-4 p-3 bg-red-900/40 border border-red-700 rounded-md text-red-300 text-sm">
                            {msg}
                        </div>
                    })
                }}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Current Password"</label>
                        <input
                            type="password"
                            prop:value=move || current.get()
                            on:input=move |ev| set_current.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"New Password"</label>
                        <input
                            type="password"
                            placeholder="At least 6 characters"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Confirm New Password"</label>
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Change Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
