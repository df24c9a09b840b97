//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading/writing
//! shared state from Leptos context providers or signals handed in as props.

pub mod field_input;
pub mod nav_bar;
pub mod progress_bar;
pub mod selection_cards;
pub mod toast_host;
