//! Selection state machine and chart view derivation.
//!
//! This crate is the reactive core of the dashboard, kept free of any UI or
//! storage concerns: a pure reducer over the province selection, and three
//! pure derivations from `(records, selection)` to chart view data. The
//! Dioxus app owns the signals; every state transition goes through
//! [`selection::apply`] and every re-render re-derives the views.

pub mod selection;
pub mod views;
