use crate::controller::{run_submission, StatusRegion, SubmitControl};
use crate::models::{PublishRequest, SubmitStatus};
use crate::service::PublishService;
use dioxus::prelude::*;

/// Props for the PublishForm component
#[derive(Props, Clone, PartialEq)]
pub struct PublishFormProps {
    /// Publish endpoint the form posts to
    pub endpoint: String,
    /// Callback with the published post link when a submission succeeds
    #[props(default)]
    pub on_published: Option<EventHandler<String>>,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<FormLabels>,
}

/// Custom labels for the form UI
#[derive(Clone, PartialEq)]
pub struct FormLabels {
    pub source_url: String,
    pub wp_url: String,
    pub username: String,
    pub password: String,
    pub submit_button: String,
    pub busy: String,
    pub success: String,
    pub view_post: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            source_url: "Blogspot Post URL".to_string(),
            wp_url: "WordPress Site URL".to_string(),
            username: "WordPress Username".to_string(),
            password: "Application Password".to_string(),
            submit_button: "Publish".to_string(),
            busy: "Publishing...".to_string(),
            success: "Passage is published!".to_string(),
            view_post: "View Post".to_string(),
        }
    }
}

/// Submit button backed by signals.
#[derive(Clone, Copy)]
struct ButtonHandle {
    enabled: Signal<bool>,
    text: Signal<String>,
}

impl SubmitControl for ButtonHandle {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled.set(enabled);
    }

    fn set_label(&mut self, label: String) {
        self.text.set(label);
    }

    fn label(&self) -> String {
        self.text.read().clone()
    }
}

/// Status region backed by a signal.
#[derive(Clone, Copy)]
struct StatusHandle(Signal<SubmitStatus>);

impl StatusRegion for StatusHandle {
    fn set_status(&mut self, status: SubmitStatus) {
        self.0.set(status);
    }
}

/// Publish form component
///
/// Renders the four-field form, posts the values to the configured endpoint
/// on submit and shows the outcome in a status region. While a submission
/// is in flight the button is disabled and carries the busy label; it is
/// restored whatever the outcome.
///
/// # Example
/// ```rust,ignore
/// PublishForm {
///     endpoint: "http://127.0.0.1:5000/publish".to_string(),
///     on_published: move |link| {
///         log::info!("published at {link}");
///     },
/// }
/// ```
#[component]
pub fn PublishForm(props: PublishFormProps) -> Element {
    let labels = props.labels.clone().unwrap_or_default();

    let mut source_url = use_signal(String::new);
    let mut wp_url = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let button_enabled = use_signal(|| true);
    let button_text = use_signal({
        let initial = labels.submit_button.clone();
        move || initial
    });
    let status = use_signal(|| SubmitStatus::Hidden);

    let handle_submit = {
        let endpoint = props.endpoint.clone();
        let busy_label = labels.busy.clone();
        let on_published = props.on_published;

        move |evt: FormEvent| {
            evt.prevent_default();

            let request = PublishRequest {
                source_url: source_url(),
                wp_url: wp_url(),
                username: username(),
                password: password(),
            };
            let endpoint = endpoint.clone();
            let busy_label = busy_label.clone();

            spawn(async move {
                let service = PublishService::new(endpoint);
                let mut button = ButtonHandle {
                    enabled: button_enabled,
                    text: button_text,
                };
                let mut region = StatusHandle(status);

                let outcome =
                    run_submission(&service, &mut button, &mut region, request, &busy_label)
                        .await;

                if let SubmitStatus::Published { link } = outcome {
                    if let Some(handler) = on_published {
                        handler.call(link);
                    }
                }
            });
        }
    };

    rsx! {
        form { id: "publishForm", class: "publish-form", onsubmit: handle_submit,

            div { class: "field",
                label { r#for: "source_url", "{labels.source_url}" }
                input {
                    id: "source_url",
                    r#type: "url",
                    class: "input",
                    required: true,
                    placeholder: "https://yourblog.blogspot.com/2025/04/post.html",
                    value: "{source_url}",
                    oninput: move |e| source_url.set(e.value()),
                }
            }

            div { class: "field",
                label { r#for: "wp_url", "{labels.wp_url}" }
                input {
                    id: "wp_url",
                    r#type: "url",
                    class: "input",
                    required: true,
                    placeholder: "https://yoursite.example.com",
                    value: "{wp_url}",
                    oninput: move |e| wp_url.set(e.value()),
                }
            }

            div { class: "field",
                label { r#for: "username", "{labels.username}" }
                input {
                    id: "username",
                    r#type: "text",
                    class: "input",
                    required: true,
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
            }

            div { class: "field",
                label { r#for: "password", "{labels.password}" }
                input {
                    id: "password",
                    r#type: "password",
                    class: "input",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }

            button {
                id: "submitBtn",
                r#type: "submit",
                class: "btn-primary",
                disabled: !button_enabled(),
                "{button_text}"
            }

            div {
                id: "statusMessage",
                class: match status() {
                    SubmitStatus::Hidden => "status hidden",
                    SubmitStatus::Published { .. } => "status success",
                    SubmitStatus::Error(_) => "status error",
                },
                match status() {
                    SubmitStatus::Hidden => rsx! {},
                    SubmitStatus::Published { link } => rsx! {
                        "{labels.success} "
                        a { href: "{link}", target: "_blank", "{labels.view_post}" }
                    },
                    SubmitStatus::Error(text) => rsx! { "{text}" },
                },
            }
        }
    }
}
