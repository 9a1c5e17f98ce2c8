use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod pages;
mod platform;
mod session;
mod widgets;

use api::ApiClient;
use components::toast::ToastProvider;
use pages::{Dashboard, Home};
use session::SessionProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api_client = ApiClient::new();
    use_context_provider(|| api_client);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider { Router::<Route> {} }
        }
    }
}

/// Shared layout wrapper for every routed page.
#[component]
fn Navbar() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}
