//! # webforge
//!
//! Leptos + WASM presentation layer for the WebForge site builder: public
//! landing page, email/OAuth login, project dashboard, and the five-step
//! project-creation wizard that persists a project and hands it to the
//! site-generation webhook.
//!
//! This crate contains pages, components, application state, and the REST
//! clients for the hosted auth/database backend. The `server` crate serves
//! it with SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
