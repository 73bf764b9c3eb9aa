//! Chat Panel Component
//!
//! Collapsible side panel with the shared message feed and a send form.
//! The feed shows oldest first and auto-scrolls to the newest message on
//! every change, whether it came from a local send or a poll tick.

use leptos::*;

use crate::api;
use crate::state::global::{format_timestamp, GlobalState};
use crate::state::sync;

/// Live chat side panel
#[component]
pub fn ChatPanel(on_close: impl Fn() + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let feed_end_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view. The timeout lets the feed render the
    // new entries before we scroll to the sentinel.
    let messages = state.messages;
    create_effect(move |_| {
        let _ = messages.get();
        if let Some(end) = feed_end_ref.get() {
            let end = end.clone();
            gloo_timers::callback::Timeout::new(0, move || {
                end.scroll_into_view();
            })
            .forget();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = draft.get();
        if !is_sendable(&text) {
            return;
        }

        set_sending.set(true);

        spawn_local(async move {
            match api::chat::send(text.trim()).await {
                Ok(()) => {
                    set_draft.set(String::new());
                    sync::refresh_messages(&state).await;
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="w-80 bg-gray-800 border-l border-gray-700 flex flex-col">
            // Header
            <div class="p-4 border-b border-gray-700 flex justify-between items-center">
                <h3 class="font-bold">"Live Chat"</h3>
                <button
                    on:click=move |_| on_close()
                    class="text-gray-400 hover:text-white"
                >
                    "✕"
                </button>
            </div>

            // Feed
            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                {move || {
                    let feed = messages.get();
                    if feed.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No messages yet. Say hi!"</p>
                        }.into_view()
                    } else {
                        feed.into_iter().map(|msg| {
                            let time = format_timestamp(&msg.timestamp, "%H:%M:%S");
                            view! {
                                <div class="bg-gray-700 p-3 rounded-md">
                                    <div class="flex items-center space-x-2 mb-1">
                                        <span class="font-semibold text-sm">{msg.username}</span>
                                        <span class="text-xs text-gray-400">{time}</span>
                                    </div>
                                    <p class="text-sm">{msg.message_text}</p>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
                <div node_ref=feed_end_ref />
            </div>

            // Send form
            <form on:submit=on_submit class="p-4 border-t border-gray-700">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || sending.get() || !is_sendable(&draft.get())
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || if sending.get() { "..." } else { "Send" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Blank and whitespace-only drafts are never sent
fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sendable_rejects_blank_input() {
        assert!(!is_sendable(""));
        assert!(!is_sendable("   "));
        assert!(!is_sendable("\t\n "));
    }

    #[test]
    fn test_is_sendable_accepts_text() {
        assert!(is_sendable("Pikachu spotted near the bridge!"));
        assert!(is_sendable("  hi  "));
    }
}
