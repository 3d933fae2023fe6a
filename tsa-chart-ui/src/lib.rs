//! Shared Dioxus components and D3.js bridge for the student dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`,
//!   plus the map-marker click callback registration
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, search controls, containers)

pub mod js_bridge;
pub mod state;
pub mod components;
