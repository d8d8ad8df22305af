#![allow(non_snake_case)]
mod components;
mod config;
mod content;
mod hooks;
mod pages;
mod utils;

use dioxus::{logger::tracing::info, prelude::*};
use pages::home::Home;

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    use_hook(|| info!("{} site mounted", config::BRAND));
    let title = format!("{} | Strategic Trading", config::BRAND);

    rsx! {
        document::Title { "{title}" }
        Home {}
    }
}
