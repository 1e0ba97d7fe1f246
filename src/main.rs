#![allow(warnings)]
//! Inventory Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod controller;
mod dom;
mod logger;
mod plotly;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
