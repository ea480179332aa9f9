//! Job Tracker Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod csrf;
mod api;
mod store;
mod context;
mod calendar;
mod analytics;
mod charts;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::load().level_filter());
    log::info!("[app] starting");
    mount_to_body(App);
}
