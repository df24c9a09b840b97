//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR under a single Axum router, the compiled
//! WASM/CSS bundle under `/pkg`, and permanent redirects from the old
//! `.html` page addresses to their routes. Any other path falls through to
//! the app, whose router renders its own not-found view.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Old static page names and the routes that replaced them.
const LEGACY_PAGES: &[(&str, &str)] = &[
    ("index.html", "/"),
    ("login.html", "/login"),
    ("dashboard.html", "/dashboard"),
    ("update-password.html", "/update-password"),
    ("create-wizard.html", "/create-wizard"),
];

/// One permanent redirect per legacy page; every other path is left to the
/// router this is merged into.
fn legacy_routes() -> Router {
    LEGACY_PAGES.iter().fold(Router::new(), |router, (name, target)| {
        router.route(&format!("/{name}"), get(move || async move { Redirect::permanent(target) }))
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR app plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("{e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(webforge::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || webforge::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(webforge::app::shell))
        .with_state(leptos_options);

    let pkg_dir: PathBuf = config.site_root.join("pkg");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(legacy_routes())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
