use thiserror::Error;

/// Errors that can occur while driving a capture stream.
///
/// Backend failures carry the runtime-provided error text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("failed to open stream: {0}")]
    OpenFailed(String),

    #[error("failed to start stream: {0}")]
    StartFailed(String),

    #[error("failed to pause stream: {0}")]
    PauseFailed(String),

    #[error("failed to resume stream: {0}")]
    ResumeFailed(String),

    #[error("a capture session is already running")]
    AlreadyRunning,

    #[error("no capture session is running")]
    NotRunning,

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("stream disconnected: {0}")]
    StreamDisconnected(String),
}
