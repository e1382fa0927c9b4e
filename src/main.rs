//! Scoreboard Frontend Entry Point

mod app;
mod bootstrap;
mod commands;
mod components;
mod config;
mod context;
mod editing;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let page = bootstrap::load_page_state();
    config::init(config::ApiConfig::new(page.api_base.as_deref()));

    mount_to_body(move || view! { <App page=page.clone() /> });
}
