//! # charla
//!
//! Leptos + WASM frontend for the Charla chat application. Renders the
//! conversation UI, manages the sidebar of saved conversations, handles
//! file and voice attachments, and exchanges JSON over HTTP with the
//! backend that proxies the language model.
//!
//! The crate builds natively with no default features so the state layer
//! can be unit-tested off-browser; the `csr` feature enables the browser
//! half (network calls, timers, Web Speech, DOM glue) and is what Trunk
//! builds for the `wasm32-unknown-unknown` target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
