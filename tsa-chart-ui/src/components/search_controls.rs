//! Search and Reset buttons dispatching selection events.

use crate::state::AppState;
use dioxus::prelude::*;
use tsa_data::selection::{apply, SelectionEvent};

/// The two buttons next to the province dropdown.
///
/// Search submits the dropdown's current choice through the selection
/// reducer; Reset clears the whole selection. Both write the reducer's
/// return value back into the `selection` signal, never mutating in place.
#[component]
pub fn SearchControls() -> Element {
    let mut state = use_context::<AppState>();

    let on_search = move |_| {
        let picked = (state.picked_province)();
        let choice = if picked.is_empty() { None } else { Some(picked) };
        let records = state.records.read().clone();
        let current = (state.selection)();
        state
            .selection
            .set(apply(SelectionEvent::Submit(choice), &current, &records));
    };

    let on_reset = move |_| {
        let records = state.records.read().clone();
        let current = (state.selection)();
        state
            .selection
            .set(apply(SelectionEvent::Reset, &current, &records));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            button {
                style: "padding: 4px 16px; background: #1976D2; color: white; border: none; border-radius: 4px; cursor: pointer;",
                onclick: on_search,
                "Search"
            }
            button {
                style: "padding: 4px 16px; background: #EEEEEE; color: #424242; border: 1px solid #BDBDBD; border-radius: 4px; cursor: pointer;",
                onclick: on_reset,
                "Reset"
            }
        }
    }
}
