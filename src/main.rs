use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod components;
mod config;
mod models;
mod playback;
mod theme;

use components::AppShell;
use config::AppConfig;
use theme::GlobalStyle;

const FAVICON: Asset = asset!("/assets/playing.svg");
const FONTS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@500;600&family=Lexend:wght@500;600&display=swap";

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Tokens are fixed for the lifetime of the app.
    let config = use_hook(AppConfig::load);
    let theme = config.theme.tokens();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: FONTS }
        document::Title { "{config.title}" }
        document::Meta { name: "theme-color", content: theme.purple500 }

        GlobalStyle { theme }
        AppShell { config: config.clone(), theme }
    }
}
