//! # client
//!
//! Leptos + WASM frontend for the EduSmart school portal.
//!
//! The session store (`state::auth`) and the route guard (`util::auth`) are
//! the core; every other page is presentational over canned data from `net`.
//! `app` wires the route table in `routes` to the pages, wrapping protected
//! ones in `components::protected_route`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging, then hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
