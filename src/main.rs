//! Task Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod form;
mod logging;
mod models;
mod notify;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    logging::init(config.log_level);
    log::info!("Task Manager starting, API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
