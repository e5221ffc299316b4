//! PropManager Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod router;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(config.level_filter());
    if let Some(err) = load_error {
        log::warn!("[CONFIG] Using defaults: {}", err);
    }
    log::info!("[APP] Starting on the {} view", config.start_view().id());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
