//! Dropdown selector for choosing a province.

use crate::state::AppState;
use dioxus::prelude::*;

/// Province dropdown selector.
///
/// Reads the record set from AppState and updates `picked_province` on
/// change. Picking alone does not touch the selection; that happens when
/// the Search button fires a submit event.
#[component]
pub fn ProvinceSelector() -> Element {
    let mut state = use_context::<AppState>();
    let records = state.records.read().clone();
    let picked = (state.picked_province)();

    let on_change = move |evt: Event<FormData>| {
        state.picked_province.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "province-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Province: "
            }
            select {
                id: "province-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: picked.is_empty(),
                    "-- เลือกจังหวัด --"
                }
                for record in records.iter() {
                    option {
                        value: "{record.province}",
                        selected: record.province == picked,
                        if record.name_en.is_empty() {
                            "{record.province}"
                        } else {
                            "{record.province} ({record.name_en})"
                        }
                    }
                }
            }
        }
    }
}
