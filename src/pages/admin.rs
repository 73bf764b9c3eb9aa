//! Admin Dashboard
//!
//! Stats cards, the user account table, the subscription table, and chat
//! moderation. Everything here is a plain fetch-on-mount view: each
//! mutating action re-fetches the whole dashboard rather than patching
//! local state.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::admin::{AdminUser, Stats, Subscription};
use crate::components::Loading;
use crate::pages::confirm;
use crate::state::global::{format_timestamp, ChatMessage, GlobalState};
use crate::state::session::SessionState;

/// Dashboard data, fetched together and replaced wholesale on reload
#[derive(Clone, Copy)]
struct AdminData {
    stats: RwSignal<Option<Stats>>,
    users: RwSignal<Vec<AdminUser>>,
    subscriptions: RwSignal<Vec<Subscription>>,
    messages: RwSignal<Vec<ChatMessage>>,
    loading: RwSignal<bool>,
}

impl AdminData {
    fn new() -> Self {
        Self {
            stats: create_rw_signal(None),
            users: create_rw_signal(Vec::new()),
            subscriptions: create_rw_signal(Vec::new()),
            messages: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
        }
    }

    /// Fetch all four resources. Individual failures surface as toasts but
    /// do not block the others.
    fn reload(self, state: GlobalState) {
        spawn_local(async move {
            match api::admin::stats().await {
                Ok(stats) => self.stats.set(Some(stats)),
                Err(e) => state.show_error(&e),
            }
            match api::admin::list_users().await {
                Ok(users) => self.users.set(users),
                Err(e) => state.show_error(&e),
            }
            match api::admin::list_subscriptions().await {
                Ok(subs) => self.subscriptions.set(subs),
                Err(e) => state.show_error(&e),
            }
            match api::admin::list_messages().await {
                Ok(messages) => self.messages.set(messages),
                Err(e) => state.show_error(&e),
            }
            self.loading.set(false);
        });
    }
}

/// Admin dashboard page
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = AdminData::new();

    create_effect(move |_| {
        data.reload(state);
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // Header
            <header class="border-b border-gray-700 bg-gray-800">
                <div class="container mx-auto px-4 py-3 flex justify-between items-center">
                    <div class="flex items-center space-x-2">
                        <span class="text-xl">"⚙️"</span>
                        <h1 class="text-xl font-bold">"Admin Dashboard"</h1>
                    </div>
                    <div class="flex items-center space-x-3">
                        <A
                            href="/map"
                            class="px-3 py-2 rounded-lg border border-gray-600 hover:bg-gray-700
                                   text-sm transition-colors"
                        >
                            "← Back to Map"
                        </A>
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

            <main class="container mx-auto px-4 py-6 space-y-8">
                {move || data.loading.get().then(|| view! { <Loading /> })}

                // Stats
                <section>
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                        {move || {
                            let stats = data.stats.get().unwrap_or_default();
                            view! {
                                <StatCard label="Total Users" value=stats.total_users icon="👥" />
                                <StatCard label="Subscriptions" value=stats.total_subscriptions icon="💳" />
                                <StatCard label="Active Sightings" value=stats.active_sightings icon="📍" />
                                <StatCard label="Chat Messages" value=stats.total_messages icon="💬" />
                            }
                        }}
                    </div>
                </section>

                // Users
                <section>
                    <h2 class="text-lg font-semibold mb-3">"Users"</h2>
                    <div class="bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400">
                                <tr>
                                    <th class="px-4 py-3 text-left">"ID"</th>
                                    <th class="px-4 py-3 text-left">"Username"</th>
                                    <th class="px-4 py-3 text-left">"Email"</th>
                                    <th class="px-4 py-3 text-left">"Role"</th>
                                    <th class="px-4 py-3 text-left">"Status"</th>
                                    <th class="px-4 py-3 text-right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || data.users.get()
                                    key=|user| (user.id, user.is_active)
                                    children=move |user| {
                                        view! { <UserRow user=user data=data state=state /> }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </section>

                // Subscriptions
                <section>
                    <h2 class="text-lg font-semibold mb-3">"Subscriptions"</h2>
                    <div class="bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700/50 text-gray-400">
                                <tr>
                                    <th class="px-4 py-3 text-left">"User"</th>
                                    <th class="px-4 py-3 text-left">"Plan"</th>
                                    <th class="px-4 py-3 text-left">"Started"</th>
                                    <th class="px-4 py-3 text-left">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || data.subscriptions.get()
                                    key=|sub| sub.id
                                    children=|sub| {
                                        view! {
                                            <tr class="border-t border-gray-700">
                                                <td class="px-4 py-3">{sub.username}</td>
                                                <td class="px-4 py-3">
                                                    {sub.plan.unwrap_or_else(|| "—".to_string())}
                                                </td>
                                                <td class="px-4 py-3 text-gray-400">
                                                    {sub.started_at
                                                        .map(|s| format_timestamp(&s, "%Y-%m-%d"))
                                                        .unwrap_or_else(|| "—".to_string())}
                                                </td>
                                                <td class="px-4 py-3">
                                                    <StatusBadge active=sub.is_active />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </section>

                // Chat moderation
                <section>
                    <h2 class="text-lg font-semibold mb-3">"Chat Moderation"</h2>
                    <div class="bg-gray-800 rounded-xl divide-y divide-gray-700">
                        <For
                            each=move || data.messages.get()
                            key=|msg| msg.id
                            children=move |msg| {
                                view! { <MessageRow message=msg data=data state=state /> }
                            }
                        />
                    </div>
                </section>
            </main>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: i64, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 flex items-center space-x-3">
            <span class="text-2xl">{icon}</span>
            <div>
                <p class="text-2xl font-bold">{value}</p>
                <p class="text-sm text-gray-400">{label}</p>
            </div>
        </div>
    }
}

#[component]
fn StatusBadge(active: bool) -> impl IntoView {
    if active {
        view! {
            <span class="text-xs bg-green-900/60 text-green-300 rounded px-2 py-1">"Active"</span>
        }
    } else {
        view! {
            <span class="text-xs bg-red-900/60 text-red-300 rounded px-2 py-1">"Suspended"</span>
        }
    }
}

#[component]
fn UserRow(user: AdminUser, data: AdminData, state: GlobalState) -> impl IntoView {
    let id = user.id;
    let is_admin_row = user.role == "admin";
    let is_active = user.is_active;

    let on_toggle = move |_| {
        // Suspension is confirmed; reactivation is not
        if is_active && !confirm("Suspend this user?") {
            return;
        }
        spawn_local(async move {
            let result = if is_active {
                api::admin::suspend_user(id).await
            } else {
                api::admin::activate_user(id).await
            };
            match result {
                Ok(()) => {
                    state.show_success(if is_active {
                        "User suspended"
                    } else {
                        "User activated"
                    });
                    data.reload(state);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <tr class="border-t border-gray-700">
            <td class="px-4 py-3 text-gray-500">{id}</td>
            <td class="px-4 py-3 font-medium">{user.username}</td>
            <td class="px-4 py-3 text-gray-400">{user.email}</td>
            <td class="px-4 py-3">
                {if is_admin_row {
                    view! {
                        <span class="text-xs bg-purple-900/60 text-purple-300 rounded px-2 py-1">
                            "Admin"
                        </span>
                    }
                } else {
                    view! {
                        <span class="text-xs bg-gray-700 text-gray-300 rounded px-2 py-1">
                            "User"
                        </span>
                    }
                }}
            </td>
            <td class="px-4 py-3">
                <StatusBadge active=is_active />
            </td>
            <td class="px-4 py-3 text-right">
                // Admin accounts cannot be suspended
                {(!is_admin_row).then(|| view! {
                    <button
                        on:click=on_toggle
                        class=if is_active {
                            "px-3 py-1 rounded bg-red-800 hover:bg-red-700 text-xs transition-colors"
                        } else {
                            "px-3 py-1 rounded bg-green-800 hover:bg-green-700 text-xs transition-colors"
                        }
                    >
                        {if is_active { "Suspend" } else { "Activate" }}
                    </button>
                })}
            </td>
        </tr>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn user_row_shows_the_account_id() {
        mount_to_body(|| {
            crate::state::global::provide_global_state();
            let state = use_context::<GlobalState>().expect("GlobalState not found");
            let user = AdminUser {
                id: 4217,
                username: "misty".to_string(),
                email: "misty@example.com".to_string(),
                role: "user".to_string(),
                is_active: true,
            };

            view! {
                <table>
                    <tbody>
                        <UserRow user=user data=AdminData::new() state=state />
                    </tbody>
                </table>
            }
        });

        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .expect("document body");
        assert!(body.inner_html().contains("4217"));
    }
}

#[component]
fn MessageRow(message: ChatMessage, data: AdminData, state: GlobalState) -> impl IntoView {
    let id = message.id;

    let on_moderate = move |_| {
        spawn_local(async move {
            match api::admin::moderate_message(id).await {
                Ok(()) => {
                    state.show_success("Message moderated");
                    data.reload(state);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let on_delete = move |_| {
        if !confirm("Delete this message?") {
            return;
        }
        spawn_local(async move {
            match api::admin::delete_message(id).await {
                Ok(()) => {
                    state.show_success("Message deleted");
                    data.reload(state);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="px-4 py-3 flex items-start justify-between gap-4">
            <div class="min-w-0">
                <div class="flex items-baseline space-x-2">
                    <span class="font-medium">{message.username}</span>
                    <span class="text-xs text-gray-500">
                        {format_timestamp(&message.timestamp, "%Y-%m-%d %H:%M")}
                    </span>
                </div>
                <p class="text-sm text-gray-300 break-words">{message.message_text}</p>
            </div>
            <div class="flex space-x-2 shrink-0">
                <button
                    on:click=on_moderate
                    class="px-3 py-1 rounded bg-yellow-800 hover:bg-yellow-700 text-xs transition-colors"
                >
                    "Moderate"
                </button>
                <button
                    on:click=on_delete
                    class="px-3 py-1 rounded bg-red-800 hover:bg-red-700 text-xs transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
