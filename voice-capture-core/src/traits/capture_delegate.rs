use crate::models::error::CaptureError;
use crate::models::state::CaptureStatus;

/// Event delegate for recorder notifications.
///
/// `on_status_changed` runs on the caller's thread. `on_error` may run on the
/// audio runtime's error thread; implementations should hand work off rather
/// than block.
pub trait CaptureDelegate: Send + Sync {
    /// Called when the recorder status changes.
    fn on_status_changed(&self, status: CaptureStatus);

    /// Called when the stream reports a failure after it was started.
    fn on_error(&self, error: &CaptureError);
}
