use crate::config::{self, AppConfig};
use dioxus::prelude::*;

#[component]
pub fn SettingsScreen(endpoint: String, on_save: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| endpoint.clone());
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let handle_save = move |_| {
        error.set(None);
        success.set(false);

        let draft_value = draft();
        let draft_trimmed = draft_value.trim();
        if draft_trimmed.is_empty() {
            error.set(Some("Server endpoint cannot be empty.".to_string()));
            return;
        }

        let new_config = AppConfig {
            server_endpoint: draft_trimmed.to_string(),
        };
        match config::save_config(&new_config) {
            Ok(()) => {
                success.set(true);
                on_save.call(new_config.server_endpoint);
            }
            Err(e) => {
                error.set(Some(format!("Could not save settings: {}", e)));
            }
        }
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0 0 24px 0;",
                "Settings"
            }

            if let Some(err) = error() {
                div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "⚠️ {err}"
                }
            }

            if success() {
                div { style: "background: #efe; border: 1px solid #cfc; color: #3a3; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "✅ Settings saved."
                }
            }

            div { class: "card",
                div { class: "field",
                    label { r#for: "server_endpoint", "Publish server endpoint" }
                    input {
                        id: "server_endpoint",
                        r#type: "url",
                        class: "input",
                        placeholder: config::DEFAULT_ENDPOINT,
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                    }
                }

                button {
                    class: "btn-primary",
                    onclick: handle_save,
                    "Save"
                }
            }
        }
    }
}
