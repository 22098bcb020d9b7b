//! Landing page: the public front door of the link shortener.

use leptos::prelude::*;

use crate::app::paths;

/// Landing page — product pitch plus navigation to the about screen.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <header class="landing-hero">
                <h1>"Sniplink"</h1>
                <p class="landing-hero__tagline">
                    "Paste a long link, share a short one."
                </p>
            </header>
            <nav class="landing-nav">
                <a href=paths::ABOUT>"About"</a>
            </nav>
        </main>
    }
}
