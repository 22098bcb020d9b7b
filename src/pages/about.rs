//! About page describing the service.

use leptos::prelude::*;

use crate::app::paths;

/// About page — what the service does, with a link back home.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="about-page">
            <h1>"About Sniplink"</h1>
            <p>
                "Sniplink turns unwieldy URLs into short links that are easy "
                "to paste into chats, posts, and printed material."
            </p>
            <nav class="about-nav">
                <a href=paths::LANDING>"Back to home"</a>
            </nav>
        </main>
    }
}
