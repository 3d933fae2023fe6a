//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The record set is written once after load;
//! the selection only ever changes through `tsa_data::selection::apply`.

use dioxus::prelude::*;
use tsa_data::selection::Selection;
use tsa_db::models::ProvinceRecord;
use tsa_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// The full record set, loaded once at startup
    pub records: Signal<Vec<ProvinceRecord>>,
    /// The dropdown's current choice ("" = placeholder)
    pub picked_province: Signal<String>,
    /// The ordered province selection driving all three views
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            records: Signal::new(Vec::new()),
            picked_province: Signal::new(String::new()),
            selection: Signal::new(Selection::new()),
        }
    }
}
