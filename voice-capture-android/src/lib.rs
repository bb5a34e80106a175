//! # voice-capture-android
//!
//! Android backend and JNI bridge for voice-capture.
//!
//! Provides:
//! - `OboeProvider`: low-latency input streams via Oboe
//! - `jni_bridge`: the `NativeAudioCapture` native methods used by the plugin
//! - `LogcatDelegate`: recorder events routed to the `log` facade
//! - `interleave`: allocation-free stereo flattening for the audio callback
//!
//! ## Usage
//! ```ignore
//! use voice_capture_android::OboeProvider;
//! use voice_capture_core::Recorder;
//!
//! let mut recorder = Recorder::new(OboeProvider::new());
//! recorder.start(0)?;
//! let samples = recorder.drain();
//! recorder.stop();
//! ```

pub mod interleave;
pub mod logcat_delegate;

#[cfg(target_os = "android")]
pub mod jni_bridge;
#[cfg(target_os = "android")]
pub mod oboe_input;

pub use logcat_delegate::LogcatDelegate;
#[cfg(target_os = "android")]
pub use oboe_input::{OboeProvider, OboeStream};
