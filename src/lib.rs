//! # sniplink-web
//!
//! Leptos + WASM client shell for the Sniplink link shortener. Wires the
//! landing and about screens into a browser-history router and exposes the
//! root [`app::App`] component for a hosting entry script to mount.

pub mod app;
pub mod pages;
pub mod router;
