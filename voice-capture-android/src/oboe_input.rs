//! Oboe input stream provider.
//!
//! Opens an Oboe input stream with the configured format and forwards every
//! delivered buffer to the core's `AudioBufferCallback` as interleaved i16.

use std::marker::PhantomData;

use oboe::{
    AudioInputCallback, AudioInputStreamSafe, AudioStream, AudioStreamAsync, AudioStreamBuilder,
    DataCallbackResult, Input, Mono, Stereo,
};

use voice_capture_core::models::config::{CaptureConfiguration, PerformanceMode, SharingMode};
use voice_capture_core::traits::capture_provider::{
    AudioBufferCallback, CaptureProvider, InputStream, StreamErrorCallback,
};

use crate::interleave::for_each_interleaved;

/// Oboe-backed capture provider.
#[derive(Debug, Default)]
pub struct OboeProvider;

impl OboeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureProvider for OboeProvider {
    type Stream = OboeStream;

    fn open_stream(
        &mut self,
        config: &CaptureConfiguration,
        device_id: i32,
        on_audio: AudioBufferCallback,
        on_error: StreamErrorCallback,
    ) -> Result<OboeStream, String> {
        let sample_rate = i32::try_from(config.sample_rate)
            .map_err(|_| format!("sample rate out of range: {}", config.sample_rate))?;

        let builder = AudioStreamBuilder::default()
            .set_direction::<Input>()
            .set_performance_mode(performance_mode(config.performance_mode))
            .set_sharing_mode(sharing_mode(config.sharing_mode))
            .set_format::<i16>()
            .set_sample_rate(sample_rate)
            .set_device_id(device_id);

        let handle = match config.channels {
            1 => StreamHandle::Mono(
                builder
                    .set_channel_count::<Mono>()
                    .set_callback(SampleForwarder::<Mono>::new(on_audio, on_error))
                    .open_stream()
                    .map_err(|e| format!("{:?}", e))?,
            ),
            2 => StreamHandle::Stereo(
                builder
                    .set_channel_count::<Stereo>()
                    .set_callback(SampleForwarder::<Stereo>::new(on_audio, on_error))
                    .open_stream()
                    .map_err(|e| format!("{:?}", e))?,
            ),
            other => return Err(format!("unsupported channel count: {}", other)),
        };

        log::debug!(
            "Opened Oboe input stream: device {}, {} Hz, {} ch",
            device_id,
            sample_rate,
            config.channels
        );
        Ok(OboeStream { handle })
    }
}

fn performance_mode(mode: PerformanceMode) -> oboe::PerformanceMode {
    match mode {
        PerformanceMode::None => oboe::PerformanceMode::None,
        PerformanceMode::PowerSaving => oboe::PerformanceMode::PowerSaving,
        PerformanceMode::LowLatency => oboe::PerformanceMode::LowLatency,
    }
}

fn sharing_mode(mode: SharingMode) -> oboe::SharingMode {
    match mode {
        SharingMode::Exclusive => oboe::SharingMode::Exclusive,
        SharingMode::Shared => oboe::SharingMode::Shared,
    }
}

/// Oboe data callback forwarding samples to the core session.
struct SampleForwarder<C> {
    on_audio: AudioBufferCallback,
    on_error: StreamErrorCallback,
    _channels: PhantomData<C>,
}

impl<C> SampleForwarder<C> {
    fn new(on_audio: AudioBufferCallback, on_error: StreamErrorCallback) -> Self {
        Self {
            on_audio,
            on_error,
            _channels: PhantomData,
        }
    }

    fn report(&self, error: oboe::Error) {
        (self.on_error)(&format!("{:?}", error));
    }
}

impl AudioInputCallback for SampleForwarder<Mono> {
    type FrameType = (i16, Mono);

    fn on_audio_ready(
        &mut self,
        _stream: &mut dyn AudioInputStreamSafe,
        frames: &[i16],
    ) -> DataCallbackResult {
        (self.on_audio)(frames);
        DataCallbackResult::Continue
    }

    fn on_error_after_close(&mut self, _stream: &mut dyn AudioInputStreamSafe, error: oboe::Error) {
        self.report(error);
    }
}

impl AudioInputCallback for SampleForwarder<Stereo> {
    type FrameType = (i16, Stereo);

    fn on_audio_ready(
        &mut self,
        _stream: &mut dyn AudioInputStreamSafe,
        frames: &[(i16, i16)],
    ) -> DataCallbackResult {
        for_each_interleaved(frames, |samples| (self.on_audio)(samples));
        DataCallbackResult::Continue
    }

    fn on_error_after_close(&mut self, _stream: &mut dyn AudioInputStreamSafe, error: oboe::Error) {
        self.report(error);
    }
}

enum StreamHandle {
    Mono(AudioStreamAsync<Input, SampleForwarder<Mono>>),
    Stereo(AudioStreamAsync<Input, SampleForwarder<Stereo>>),
}

/// An open Oboe input stream.
pub struct OboeStream {
    handle: StreamHandle,
}

// SAFETY: Oboe stream control calls (start/pause/stop/close) may be issued from
// any thread. The handle is only reached through `&mut self`, so calls are
// never concurrent.
unsafe impl Send for OboeStream {}

/// Run the same expression against whichever stream variant is held.
macro_rules! on_stream {
    ($handle:expr, $stream:ident => $body:expr) => {
        match $handle {
            StreamHandle::Mono($stream) => $body,
            StreamHandle::Stereo($stream) => $body,
        }
    };
}

impl InputStream for OboeStream {
    fn request_start(&mut self) -> Result<(), String> {
        on_stream!(&mut self.handle, s => s.request_start()).map_err(|e| format!("{:?}", e))
    }

    fn request_pause(&mut self) -> Result<(), String> {
        on_stream!(&mut self.handle, s => s.request_pause()).map_err(|e| format!("{:?}", e))
    }

    fn request_stop(&mut self) -> Result<(), String> {
        on_stream!(&mut self.handle, s => s.request_stop()).map_err(|e| format!("{:?}", e))
    }

    fn close(&mut self) -> Result<(), String> {
        on_stream!(&mut self.handle, s => s.close()).map_err(|e| format!("{:?}", e))
    }
}
