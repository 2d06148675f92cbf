//! Todo Client Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod render;
mod session;
#[cfg(test)]
mod testing;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = Config::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("[APP] starting, api at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
