//! Recorder delegate that reports events through the `log` facade.
//!
//! On device the facade is backed by logcat (see `jni_bridge`).

use voice_capture_core::{CaptureDelegate, CaptureError, CaptureStatus};

#[derive(Debug, Default)]
pub struct LogcatDelegate;

impl CaptureDelegate for LogcatDelegate {
    fn on_status_changed(&self, status: CaptureStatus) {
        log::info!("Recording status: {}", status.as_str());
    }

    fn on_error(&self, error: &CaptureError) {
        log::error!("Recording interrupted: {}", error);
    }
}
