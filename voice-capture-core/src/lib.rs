//! # voice-capture-core
//!
//! Platform-agnostic core of the voice capture bridge.
//!
//! Owns the capture session lifecycle and the sample buffer shared between the
//! realtime audio callback and the caller. Platform backends (Android Oboe)
//! implement the `CaptureProvider` trait and plug into `Recorder`.
//!
//! ## Architecture
//!
//! ```text
//! voice-capture-core (this crate)
//! ├── traits/       ← CaptureProvider, InputStream, CaptureDelegate
//! ├── models/       ← CaptureError, CaptureStatus, CaptureConfiguration, diagnostics, RecordingChunk
//! ├── processing/   ← RingBuffer, WAV packaging
//! └── session/      ← CaptureSession (one open stream), Recorder (facade)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

pub use models::config::{CaptureConfiguration, PerformanceMode, SharingMode};
pub use models::diagnostics::CaptureDiagnostics;
pub use models::error::CaptureError;
pub use models::recording_chunk::RecordingChunk;
pub use models::state::CaptureStatus;
pub use processing::ring_buffer::RingBuffer;
pub use session::capture::CaptureSession;
pub use session::recorder::Recorder;
pub use traits::capture_delegate::CaptureDelegate;
pub use traits::capture_provider::{
    AudioBufferCallback, CaptureProvider, InputStream, StreamErrorCallback,
};
