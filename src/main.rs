#![allow(warnings)]
//! Objective Modal Frontend Entry Point

mod models;
mod error;
mod config;
mod payload;
mod state;
mod commands;
mod context;
mod entry;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
