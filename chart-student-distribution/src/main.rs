//! Student Distribution by Province
//!
//! Single-page dashboard showing where Thailand's students are: a grouped
//! male/female/total bar chart, a province marker map, and a per-province
//! male/female pie chart, all derived from one shared selection.
//!
//! Data flow:
//! 1. On mount, the static province coordinate CSV is loaded into an
//!    in-memory SQLite database, then the OBEC feed JSON is fetched. When
//!    the fetch fails the embedded snapshot (copied into `OUT_DIR` by
//!    `build.rs`) takes its place.
//! 2. `query_records()` LEFT JOINs counts against coordinates once; the
//!    resulting record set is immutable for the rest of the session.
//! 3. Every input event (Search, Reset, map marker click) runs through the
//!    `tsa_data::selection::apply` reducer, and the render effect re-derives
//!    all three views from `(records, selection)`.

use dioxus::prelude::*;
use tsa_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, ProvinceSelector, SearchControls,
};
use tsa_chart_ui::js_bridge;
use tsa_chart_ui::state::AppState;
use tsa_data::selection::{apply, SelectionEvent};
use tsa_data::views;
use tsa_db::models::ProvinceRecord;
use tsa_db::Database;

/// Offline fallback snapshot of the feed (may be an empty placeholder).
const SNAPSHOT_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/students_snapshot.json"));

/// Chart container DOM element IDs used by D3.js to render into.
const BAR_CHART_ID: &str = "province-bar-chart";
const MAP_CHART_ID: &str = "province-map-chart";
const PIE_CHART_ID: &str = "province-pie-chart";

const MALE_COLOR: &str = "#2196F3";
const FEMALE_COLOR: &str = "#E91E63";
const TOTAL_COLOR: &str = "#9E9E9E";
const MARKER_COLOR: &str = "#607D8B";
const SELECTED_COLOR: &str = "#FF5722";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("student-atlas-root"))
        .launch(App);
}

fn display_label(record: &ProvinceRecord) -> String {
    if record.name_en.is_empty() {
        record.province.clone()
    } else {
        record.name_en.clone()
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize the database and load data once on mount.
    use_effect(move || {
        let db = match Database::new() {
            Ok(db) => db,
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        if let Err(e) = db.load_coordinates(tsa_obec::coordinate::COORDINATES_CSV) {
            log::error!("Failed to load coordinates: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load province coordinates: {}", e)));
            state.loading.set(false);
            return;
        }
        state.db.set(Some(db.clone()));

        spawn(async move {
            let fetched = match reqwest::get(tsa_obec::feed::FEED_URL).await {
                Ok(response) if response.status().is_success() => response.text().await.ok(),
                Ok(response) => {
                    log::warn!("OBEC feed returned status {}", response.status());
                    None
                }
                Err(e) => {
                    log::warn!("OBEC feed fetch failed: {}", e);
                    None
                }
            };

            let mut loaded = false;
            if let Some(body) = fetched {
                match db.load_student_counts(&body) {
                    Ok(()) => loaded = true,
                    Err(e) => log::warn!("Fetched feed did not parse: {}", e),
                }
            }
            if !loaded {
                log::warn!("Using embedded snapshot instead of live feed");
                match db.load_student_counts(SNAPSHOT_JSON) {
                    Ok(()) => loaded = true,
                    Err(e) => log::error!("Snapshot did not parse either: {}", e),
                }
            }

            if !loaded {
                state.error_msg.set(Some(
                    "Could not load student data: the OBEC feed is unreachable and no \
                     offline snapshot is embedded in this build."
                        .to_string(),
                ));
                state.loading.set(false);
                return;
            }

            match db.query_records() {
                Ok(records) if !records.is_empty() => state.records.set(records),
                Ok(_) => state
                    .error_msg
                    .set(Some("The feed contained no province rows.".to_string())),
                Err(e) => state
                    .error_msg
                    .set(Some(format!("Failed to query records: {}", e))),
            }
            state.loading.set(false);
        });
    });

    // Map marker clicks arrive from JS; feed them through the reducer.
    use_effect(move || {
        js_bridge::set_marker_click_handler(move |province| {
            let records = state.records.read().clone();
            let current = (state.selection)();
            state
                .selection
                .set(apply(SelectionEvent::MapClick(province), &current, &records));
        });
    });

    // Re-derive and re-render all three views whenever the record set or
    // the selection changes.
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let records = state.records.read().clone();
        let selection = (state.selection)();
        if records.is_empty() {
            return;
        }

        js_bridge::init_charts();

        // 1. Grouped bar chart
        let bar_rows = views::bar_view(&records, &selection);
        let bar_data: Vec<serde_json::Value> = bar_rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "label": display_label(r),
                    "province": r.province,
                    "male": r.male,
                    "female": r.female,
                    "total": r.total,
                })
            })
            .collect();
        let bar_config = serde_json::json!({
            "yAxisLabel": "Number of Students",
            "maleColor": MALE_COLOR,
            "femaleColor": FEMALE_COLOR,
            "totalColor": TOTAL_COLOR,
        });
        js_bridge::render_bar_chart(
            BAR_CHART_ID,
            &serde_json::to_string(&bar_data).unwrap_or_default(),
            &serde_json::to_string(&bar_config).unwrap_or_default(),
        );

        // 2. Province marker map
        let map = views::map_view(&records, &selection);
        let map_config = serde_json::json!({
            "title": "Marker area ~ total students. Click a marker to add it to the comparison.",
            "centerLat": map.center_latitude,
            "centerLon": map.center_longitude,
            "zoom": map.zoom,
            "markerColor": MARKER_COLOR,
            "selectedColor": SELECTED_COLOR,
        });
        js_bridge::render_province_map(
            MAP_CHART_ID,
            &serde_json::to_string(&map.markers).unwrap_or_default(),
            &serde_json::to_string(&map_config).unwrap_or_default(),
        );

        // 3. Male/female pie chart
        match views::pie_view(&records, &selection) {
            Some(pie) => {
                let label = if pie.name_en.is_empty() {
                    pie.province.clone()
                } else {
                    format!("{} ({})", pie.province, pie.name_en)
                };
                let pie_data = serde_json::json!({
                    "label": label,
                    "male": pie.male,
                    "female": pie.female,
                });
                let pie_config = serde_json::json!({
                    "title": label,
                    "maleColor": MALE_COLOR,
                    "femaleColor": FEMALE_COLOR,
                });
                js_bridge::render_pie_chart(
                    PIE_CHART_ID,
                    &serde_json::to_string(&pie_data).unwrap_or_default(),
                    &serde_json::to_string(&pie_config).unwrap_or_default(),
                );
            }
            None => js_bridge::destroy_chart(PIE_CHART_ID),
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Student Distribution by Province".to_string(),
                subtitle: "OBEC province-level student counts, academic year 2566 BE".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    ProvinceSelector {}
                    SearchControls {}
                }

                SelectionSummary {}

                ChartContainer {
                    id: BAR_CHART_ID.to_string(),
                    loading: false,
                    min_height: 400,
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 16px;",
                    div {
                        style: "flex: 1 1 480px;",
                        ChartContainer {
                            id: MAP_CHART_ID.to_string(),
                            loading: false,
                            min_height: 450,
                        }
                    }
                    div {
                        style: "flex: 1 1 340px;",
                        ChartContainer {
                            id: PIE_CHART_ID.to_string(),
                            loading: false,
                            min_height: 360,
                        }
                    }
                }
            }
        }
    }
}

/// One-line summary of the current selection under the controls.
#[component]
fn SelectionSummary() -> Element {
    let state = use_context::<AppState>();
    let selection = (state.selection)();
    let summary = if selection.is_empty() {
        "Showing all provinces. Pick a province and press Search, or click a map \
         marker, to build a comparison set."
            .to_string()
    } else {
        format!(
            "Selected ({}): {}. Pie and map focus follow the most recent.",
            selection.len(),
            selection.provinces().join(", ")
        )
    };

    rsx! {
        div {
            style: "margin: 4px 0 12px 0; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; color: #424242;",
            "{summary}"
        }
    }
}
