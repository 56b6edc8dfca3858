//! Submission sequence shared by the Dioxus component and the tests.
//!
//! The submit button, the status region and the network transport are
//! injected through small traits, so the exact same sequence runs whether
//! the handles are backed by `Signal`s or by test doubles.

use crate::models::{PublishRequest, PublishResponse, SubmitStatus};
use crate::service::PublishError;

/// Handle to the submit button.
pub trait SubmitControl {
    fn set_enabled(&mut self, enabled: bool);
    fn set_label(&mut self, label: String);
    fn label(&self) -> String;
}

/// Handle to the status region below the form.
pub trait StatusRegion {
    fn set_status(&mut self, status: SubmitStatus);
}

/// Network seam; implemented by [`crate::PublishService`] in production.
pub trait PublishTransport {
    fn submit(
        &self,
        request: &PublishRequest,
    ) -> impl std::future::Future<Output = Result<PublishResponse, PublishError>>;
}

/// Disables the submit control and swaps in a busy label; the original
/// label and the enabled state come back when the guard is dropped, on
/// every exit path.
struct BusyGuard<'a, C: SubmitControl> {
    control: &'a mut C,
    original_label: String,
}

impl<'a, C: SubmitControl> BusyGuard<'a, C> {
    fn hold(control: &'a mut C, busy_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(busy_label.to_string());
        control.set_enabled(false);
        Self {
            control,
            original_label,
        }
    }
}

impl<C: SubmitControl> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(self.original_label.clone());
        self.control.set_enabled(true);
    }
}

/// Runs one submission attempt from start to finish.
///
/// Sequence: hide any previous status, enter the busy state, send the
/// payload, then map the outcome onto the status region:
/// - `success == true` renders the published link
/// - `success == false` renders `Error: {message}`
/// - a transport or parse failure renders `Network or Server Error: {description}`
///
/// The returned status is the terminal state of the attempt. The submit
/// control is restored and re-enabled regardless of outcome.
pub async fn run_submission<T, C, S>(
    transport: &T,
    control: &mut C,
    status: &mut S,
    request: PublishRequest,
    busy_label: &str,
) -> SubmitStatus
where
    T: PublishTransport,
    C: SubmitControl,
    S: StatusRegion,
{
    status.set_status(SubmitStatus::Hidden);
    let _busy = BusyGuard::hold(control, busy_label);

    let outcome = match transport.submit(&request).await {
        Ok(response) if response.success => SubmitStatus::Published {
            link: response.link.unwrap_or_default(),
        },
        Ok(response) => SubmitStatus::Error(format!(
            "Error: {}",
            response.message.unwrap_or_default()
        )),
        Err(e) => {
            log::warn!("Publish submission failed: {}", e);
            SubmitStatus::Error(format!("Network or Server Error: {}", e))
        }
    };

    status.set_status(outcome.clone());
    outcome
}
