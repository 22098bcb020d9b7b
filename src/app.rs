//! Root application component: the router shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the route table and renders the view matching the current browser
//! location. History integration (same-origin link interception,
//! back/forward, programmatic navigation) comes from `leptos_router`; path
//! → view resolution goes through `crate::router` so the routing library
//! stays behind one seam.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::pages::{about::AboutPage, landing::LandingPage};
use crate::router::RouteTable;

/// Literal path patterns for the application's navigable screens.
pub mod paths {
    /// Landing screen.
    pub const LANDING: &str = "/";
    /// About screen.
    pub const ABOUT: &str = "/about";
}

/// Build the application's route table.
///
/// Called once per shell instance. Entries hold `fn` pointers, so no page
/// is instantiated here and two shells never share routing state.
pub(crate) fn route_table() -> RouteTable<AnyView> {
    RouteTable::new()
        .register(paths::LANDING, || LandingPage().into_any())
        .register(paths::ABOUT, || AboutPage().into_any())
}

/// Root application component.
///
/// Sets up the meta context and document title, then hands rendering to the
/// route outlet inside a history-aware `Router`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sniplink"/>

        <Router>
            <RouteOutlet/>
        </Router>
    }
}

/// Renders the view matching the current location.
///
/// Must live below `Router` so the location signal is in context. The route
/// table is moved into the render closure and only ever read; each
/// navigation event re-runs the closure synchronously.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    let table = route_table();

    move || {
        let path = location.pathname.get();
        table.current_view(&path).unwrap_or_else(|| unmatched(&path))
    }
}

/// Rendered when no route matches the current path.
///
/// Unknown paths render neither registered view. The placeholder text and
/// warning keep the miss visible instead of leaving the document blank.
fn unmatched(path: &str) -> AnyView {
    log::warn!("no route registered for {path}");

    view! {
        <main class="not-found">
            <p>"Page not found."</p>
        </main>
    }
    .into_any()
}
