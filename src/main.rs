//! Project Manager Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dates;
mod forms;
mod models;
mod routes;
mod services;
mod session;
mod task_view;
#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if browser_logger::init_logger(config::APP_NAME, level, config::LOG_HISTORY_LINES).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("{} starting", config::APP_NAME);
    mount_to_body(App);
}
