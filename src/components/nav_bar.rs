//! Top navigation with a burger toggle for narrow screens.
//!
//! DESIGN
//! ======
//! Link choice depends only on whether a user is signed in, so it is a pure
//! function; the component owns nothing but the open/closed flag. A click
//! anywhere outside the menu and burger closes it, and the page body does not
//! scroll while it is open.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::config::paths;
use crate::state::auth::AuthState;

/// `(label, href)` pairs for the main navigation.
pub fn nav_links(signed_in: bool) -> &'static [(&'static str, &'static str)] {
    if signed_in {
        &[("Features", "/#features"), ("Pricing", "/#pricing"), ("Dashboard", paths::DASHBOARD)]
    } else {
        &[("Features", "/#features"), ("Pricing", "/#pricing"), ("Log in", paths::LOGIN)]
    }
}

/// Menu state after a document click; `inside` is true for the menu or burger.
pub fn menu_after_click(open: bool, inside: bool) -> bool {
    open && inside
}

/// `overflow` value for the page body.
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open { "hidden" } else { "" }
}

fn lock_body_scroll(menu_open: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", body_overflow(menu_open));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = menu_open;
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let burger_ref = NodeRef::<leptos::html::Button>::new();

    Effect::new(move |_| lock_body_scroll(menu_open.get()));

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
            let open = menu_open.get_untracked();
            if !open {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let within = |el: Option<web_sys::HtmlElement>| el.is_some_and(|el| el.contains(target.as_ref()));
            let inside = within(nav_ref.get_untracked().map(Into::into))
                || within(burger_ref.get_untracked().map(Into::into));
            if menu_after_click(open, inside) != open {
                menu_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <header class="site-header">
            <a class="logo" href=paths::HOME>"WebForge"</a>
            <button
                id="burger-menu"
                node_ref=burger_ref
                class="burger"
                class:active=move || menu_open.get()
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    menu_open.update(|open| *open = !*open);
                }
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class="main-nav" node_ref=nav_ref class:menu-open=move || menu_open.get()>
                {move || {
                    let signed_in = auth.get().user.is_some();
                    nav_links(signed_in)
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href on:click=move |_| menu_open.set(false)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </header>
    }
}
