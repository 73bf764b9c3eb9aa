//! Global Application State
//!
//! Reactive state management using Leptos signals. The sighting list and
//! chat feed are caches of server truth, replaced wholesale by the polling
//! synchronizer or by explicit re-fetches after mutating calls.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Sightings within the active time window
    pub sightings: RwSignal<Vec<Sighting>>,
    /// Chat feed, oldest first
    pub messages: RwSignal<Vec<ChatMessage>>,
    /// Active Pokémon type filter (empty string means all types)
    pub filter_type: RwSignal<String>,
    /// Last successful refresh timestamp
    pub last_sync: RwSignal<Option<i64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A geo-pinned sighting report from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Sighting {
    pub id: i64,
    pub pokemon_name: String,
    #[serde(default)]
    pub pokemon_type: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub reporter_username: String,
    pub time_reported: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_active: bool,
}

/// A shared chat message from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ChatMessage {
    pub id: i64,
    pub username: String,
    pub message_text: String,
    pub timestamp: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        sightings: create_rw_signal(Vec::new()),
        messages: create_rw_signal(Vec::new()),
        filter_type: create_rw_signal(String::new()),
        last_sync: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Render a server timestamp (RFC 3339) with the given chrono format string.
/// Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str, fmt: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format(fmt).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-06-01T14:02:30Z", "%Y-%m-%d %H:%M"),
            "2025-06-01 14:02"
        );
        assert_eq!(
            format_timestamp("2025-06-01T14:02:30+07:00", "%H:%M:%S"),
            "14:02:30"
        );
    }

    #[test]
    fn test_format_timestamp_passes_through_garbage() {
        assert_eq!(format_timestamp("yesterday", "%H:%M"), "yesterday");
    }

    #[test]
    fn test_sighting_deserializes_with_optional_fields() {
        let json = r#"{
            "id": 3,
            "pokemon_name": "Pikachu",
            "latitude": 14.02,
            "longitude": 99.53,
            "reporter_username": "ash",
            "time_reported": "2025-06-01T14:02:30Z"
        }"#;

        let sighting: Sighting = serde_json::from_str(json).unwrap();
        assert_eq!(sighting.pokemon_name, "Pikachu");
        assert!(sighting.pokemon_type.is_none());
        assert!(!sighting.is_verified);
    }
}
