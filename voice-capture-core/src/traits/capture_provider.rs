use std::sync::Arc;

use crate::models::config::CaptureConfiguration;

/// Callback invoked on the realtime audio thread for every delivered buffer.
///
/// `samples` holds `frame_count * channels` interleaved signed 16-bit samples.
/// Implementations must not block or allocate.
pub type AudioBufferCallback = Arc<dyn Fn(&[i16]) + Send + Sync + 'static>;

/// Callback invoked when the runtime reports that the stream failed
/// (device disconnected, service restarted). Receives the runtime's error text.
pub type StreamErrorCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Opens input streams against a platform audio runtime.
///
/// Implemented by:
/// - `OboeProvider` (Android)
pub trait CaptureProvider: Send {
    type Stream: InputStream;

    /// Open (but do not start) an input stream on `device_id` using `config`.
    ///
    /// `on_audio` is registered as the stream's data callback and `on_error`
    /// as its error callback. Errors carry the runtime-provided description.
    fn open_stream(
        &mut self,
        config: &CaptureConfiguration,
        device_id: i32,
        on_audio: AudioBufferCallback,
        on_error: StreamErrorCallback,
    ) -> Result<Self::Stream, String>;
}

/// Control surface of an open input stream.
///
/// All requests are synchronous from the caller's side.
pub trait InputStream: Send {
    fn request_start(&mut self) -> Result<(), String>;

    fn request_pause(&mut self) -> Result<(), String>;

    fn request_stop(&mut self) -> Result<(), String>;

    /// Close the stream. No callbacks fire after this returns.
    fn close(&mut self) -> Result<(), String>;
}
