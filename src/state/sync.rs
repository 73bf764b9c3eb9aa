//! Polling Synchronizer
//!
//! Keeps the sighting list and chat feed approximately fresh without a
//! persistent connection: fetch both immediately, then re-fetch on a fixed
//! interval until the owning view stops the poller. Each tick replaces the
//! local lists with the server's current window; no diffing, no ordering
//! guarantee across the two resources.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

use crate::api;
use crate::state::global::GlobalState;

/// Refresh cadence for sightings and chat
pub const POLL_INTERVAL_MS: u32 = 30_000;
/// Trailing window of sightings to display
pub const SIGHTING_WINDOW_HOURS: u32 = 24;
/// Trailing window of chat messages to display
pub const CHAT_WINDOW_HOURS: u32 = 24;
/// Maximum chat messages fetched per refresh
pub const CHAT_FETCH_LIMIT: u32 = 50;

/// A cancellable repeating refresh task bound to a view's lifetime.
///
/// Clones share the underlying interval, so a clone handed to an effect and
/// a clone handed to `on_cleanup` control the same task.
#[derive(Clone, Default)]
pub struct Poller {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `tick` immediately, then every [`POLL_INTERVAL_MS`]. Replaces any
    /// interval already running, which restarts the cadence.
    pub fn start<F>(&self, tick: F)
    where
        F: Fn() + 'static,
    {
        tick();
        let repeating = Interval::new(POLL_INTERVAL_MS, move || tick());
        *self.interval.borrow_mut() = Some(repeating);
    }

    /// Cancel the repeating task. In-flight requests are not aborted.
    pub fn stop(&self) {
        self.interval.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

/// Re-fetch the sighting window, honoring the active type filter. Failures
/// are logged, not toasted: a background tick should not interrupt the user.
pub async fn refresh_sightings(state: &GlobalState) {
    let filter = state.filter_type.get_untracked();
    let filter = (!filter.is_empty()).then_some(filter);

    match api::sightings::list(Some(SIGHTING_WINDOW_HOURS), filter.as_deref()).await {
        Ok(sightings) => state.sightings.set(sightings),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch sightings: {}", e).into());
        }
    }
}

/// Re-fetch the chat feed and record the sync time.
pub async fn refresh_messages(state: &GlobalState) {
    match api::chat::list(Some(CHAT_FETCH_LIMIT), Some(CHAT_WINDOW_HOURS)).await {
        Ok(messages) => {
            state.messages.set(messages);
            state
                .last_sync
                .set(Some(chrono::Utc::now().timestamp_millis()));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch messages: {}", e).into());
        }
    }
}

/// One poll tick: refresh both resources.
pub fn refresh_all(state: GlobalState) {
    spawn_local(async move {
        refresh_sightings(&state).await;
        refresh_messages(&state).await;
    });
}
