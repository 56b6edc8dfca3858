use dioxus::prelude::*;
use publish_form::PublishForm;

#[component]
pub fn PublishScreen(endpoint: String) -> Element {
    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0 0 8px 0;",
                "Blogspot → WordPress"
            }
            p { style: "margin: 0 0 24px 0; font-size: 14px; color: #666;",
                "Copies one Blogspot post, including its images and videos, to your WordPress site."
            }

            div { class: "card",
                PublishForm {
                    endpoint,
                    on_published: move |link: String| {
                        log::info!("Post published at {}", link);
                    },
                }
            }
        }
    }
}
