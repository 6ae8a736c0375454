//! Photo Gallery Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod form;
mod models;
mod store;

use app::App;
use config::GalleryConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let gallery_config = config::init(GalleryConfig::from_document());
    web_sys::console::log_1(&format!("[APP] Gallery API base: {:?}", gallery_config.base_url).into());
    mount_to_body(App);
}
