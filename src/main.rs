use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod filesystem;

use components::{NavigationBar, PublishScreen, SettingsScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::init();
    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Publish,
    Settings,
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Publish);
    let mut endpoint = use_signal(|| config::load_config().server_endpoint);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Publish => rsx! {
                        PublishScreen { endpoint: endpoint() }
                    },
                    Screen::Settings => rsx! {
                        SettingsScreen {
                            endpoint: endpoint(),
                            on_save: move |new_endpoint| endpoint.set(new_endpoint),
                        }
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
