//! Report Modal Component
//!
//! Form for reporting a new sighting. The location must be chosen first by
//! clicking the map, so the dialog docks to the side of the viewport and its
//! wrapper ignores pointer events: map clicks pass through to the canvas
//! while the form is open. Submission is disallowed until both a name and a
//! location exist, and no network call is issued for an incomplete draft.
//! On failure all draft state is preserved for retry.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::sync;

pub(crate) const TYPE_OPTIONS: [&str; 10] = [
    "Water", "Fire", "Grass", "Electric", "Psychic", "Normal", "Flying", "Bug", "Rock", "Ground",
];

// The wrapper must not swallow clicks meant for the map canvas; only the
// dialog itself takes pointer events.
const OVERLAY_CLASS: &str = "fixed inset-0 z-40 flex items-center justify-end p-4 pointer-events-none";
const DIALOG_CLASS: &str = "pointer-events-auto bg-gray-800 rounded-xl p-6 w-full max-w-md \
     shadow-2xl border border-gray-700";

/// Sighting report dialog, docked beside the map
#[component]
pub fn ReportModal(
    /// Location chosen on the map, cleared on success or close
    selected_location: RwSignal<Option<(f64, f64)>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (pokemon_type, set_pokemon_type) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let pokemon_name = name.get();
        let location = selected_location.get_untracked();

        if let Some(msg) = draft_error(&pokemon_name, location) {
            state.show_error(msg);
            return;
        }
        let Some((latitude, longitude)) = location else {
            return;
        };

        set_submitting.set(true);

        let chosen_type = pokemon_type.get();
        let close = on_close_for_submit.clone();
        spawn_local(async move {
            let result = api::sightings::create(
                pokemon_name.trim(),
                Some(chosen_type.as_str()),
                latitude,
                longitude,
            )
            .await;

            match result {
                Ok(_) => {
                    // Clear the draft and let the re-fetch surface the new
                    // entry with its server-assigned id and timestamp
                    set_name.set(String::new());
                    set_pokemon_type.set(String::new());
                    selected_location.set(None);
                    close();
                    state.show_success("Sighting reported successfully!");
                    sync::refresh_sightings(&state).await;
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class=OVERLAY_CLASS>
            <div class=DIALOG_CLASS>
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Report Pokémon Sighting"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <p class="text-sm text-gray-400 mb-4">
                    "Click on the map to select the location where you found the Pokémon."
                </p>

                {move || {
                    selected_location.get().map(|(lat, lng)| view! {
                        <div class="mb-4 p-2 bg-green-900/40 border border-green-700 rounded text-sm text-green-300">
                            {format!("✓ Location selected: {:.4}, {:.4}", lat, lng)}
                        </div>
                    })
                }}

                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Pokémon Name *"</label>
                        <input
                            type="text"
                            placeholder="e.g., Pikachu"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Type
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Type (Optional)"</label>
                        <select
                            on:change=move |ev| set_pokemon_type.set(event_target_value(&ev))
                            prop:value=move || pokemon_type.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"Select type..."</option>
                            {TYPE_OPTIONS.into_iter().map(|t| view! {
                                <option value=t>{t}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        disabled=move || {
                            submitting.get()
                                || draft_error(&name.get(), selected_location.get()).is_some()
                        }
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || if submitting.get() { "Reporting..." } else { "Report Sighting" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// What still blocks submission, if anything. The name is checked first so
/// an implicit form submission reports the field actually missing.
fn draft_error(name: &str, location: Option<(f64, f64)>) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Please enter a Pokémon name");
    }
    if location.is_none() {
        return Some("Please select a location on the map");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_location_is_reported() {
        assert_eq!(
            draft_error("Pikachu", None),
            Some("Please select a location on the map")
        );
    }

    #[test]
    fn test_missing_name_is_reported() {
        assert_eq!(
            draft_error("", Some((14.02, 99.53))),
            Some("Please enter a Pokémon name")
        );
        assert_eq!(
            draft_error("   ", Some((14.02, 99.53))),
            Some("Please enter a Pokémon name")
        );
    }

    #[test]
    fn test_complete_draft_passes() {
        assert_eq!(draft_error("Pikachu", Some((14.02, 99.53))), None);
    }

    #[test]
    fn test_dialog_leaves_the_map_clickable() {
        // Choosing the location requires clicking the canvas while the
        // dialog is open
        assert!(OVERLAY_CLASS.contains("pointer-events-none"));
        assert!(DIALOG_CLASS.contains("pointer-events-auto"));
    }
}
