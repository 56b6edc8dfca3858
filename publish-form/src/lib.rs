//! # Publish Form
//!
//! The submission flow behind blogport's publish form.
//!
//! This crate provides:
//! - The request/response payloads exchanged with a publish server
//! - An async submission controller with guaranteed button restoration
//! - A Dioxus form component (behind the `components` feature)
//!
//! ## Separation of Concerns
//!
//! The controller works against small traits for the submit button, the
//! status region and the transport, so the same sequence runs under the
//! Dioxus component in production and under plain test doubles in tests.
//! It does **not**:
//! - Validate field values (forwarded verbatim)
//! - Retry or queue failed submissions
//! - Persist anything across runs
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use publish_form::{PublishForm, PublishRequest, PublishService};
//!
//! // Programmatic usage
//! let service = PublishService::new("http://127.0.0.1:5000/publish".to_string());
//! let response = service.submit(&request).await?;
//!
//! // UI component usage
//! PublishForm {
//!     endpoint: "http://127.0.0.1:5000/publish".to_string(),
//!     on_published: move |link| {
//!         // Post is live at `link`
//!     },
//! }
//! ```

pub mod controller;
pub mod models;
pub mod service;

#[cfg(feature = "components")]
pub mod component;

#[cfg(feature = "components")]
pub use component::{FormLabels, PublishForm, PublishFormProps};
pub use controller::{run_submission, PublishTransport, StatusRegion, SubmitControl};
pub use models::{PublishRequest, PublishResponse, SubmitStatus};
pub use service::{PublishError, PublishService};
