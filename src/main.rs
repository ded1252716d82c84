#![allow(dead_code)]
//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod ids;
mod logging;
mod models;
mod storage;
mod store;

use app::App;
use config::StoreConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = StoreConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
