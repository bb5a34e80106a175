use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::config::CaptureConfiguration;
use crate::models::diagnostics::CaptureDiagnostics;
use crate::models::error::CaptureError;
use crate::models::state::CaptureStatus;
use crate::processing::ring_buffer::RingBuffer;
use crate::traits::capture_delegate::CaptureDelegate;
use crate::traits::capture_provider::{
    AudioBufferCallback, CaptureProvider, InputStream, StreamErrorCallback,
};

/// State shared between the audio callback and the caller's thread.
///
/// The callback holds the lock for one bounded copy into the ring; drain holds
/// it for one copy out. Nothing else is done under the lock.
struct SharedCapture {
    ring: RingBuffer,
    callback_count: u64,
    samples_drained: u64,
    dropped_reported: u64,
}

impl SharedCapture {
    fn new(capacity: usize) -> Self {
        Self {
            ring: RingBuffer::new(capacity),
            callback_count: 0,
            samples_drained: 0,
            dropped_reported: 0,
        }
    }
}

/// One open capture stream and the samples it has delivered.
///
/// Created by [`CaptureSession::open`], which only returns once the stream is
/// both open and started. The stream is stopped and closed by
/// [`CaptureSession::stop`], or on drop.
pub struct CaptureSession<S: InputStream> {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: CaptureConfiguration,
    stream: Option<S>,
    shared: Arc<Mutex<SharedCapture>>,
    paused: bool,
    interrupted: Arc<AtomicBool>,
}

impl<S: InputStream> CaptureSession<S> {
    /// Open a stream on `device_id` and start it.
    ///
    /// If the stream opens but fails to start it is closed before the error is
    /// returned, so no callback stays registered on failure.
    pub fn open<P>(
        provider: &mut P,
        config: &CaptureConfiguration,
        device_id: i32,
        delegate: Option<Arc<dyn CaptureDelegate>>,
    ) -> Result<Self, CaptureError>
    where
        P: CaptureProvider<Stream = S>,
    {
        config.validate().map_err(CaptureError::ConfigurationFailed)?;
        let capacity = config.buffer_capacity_samples().ok_or_else(|| {
            CaptureError::ConfigurationFailed(format!(
                "buffer of {} s at {} Hz does not fit in memory",
                config.buffer_capacity_secs, config.sample_rate
            ))
        })?;

        let shared = Arc::new(Mutex::new(SharedCapture::new(capacity)));
        let interrupted = Arc::new(AtomicBool::new(false));

        let on_audio: AudioBufferCallback = {
            let shared = Arc::clone(&shared);
            Arc::new(move |samples: &[i16]| {
                let mut s = shared.lock();
                s.callback_count += 1;
                s.ring.write(samples);
            })
        };

        let on_error: StreamErrorCallback = {
            let interrupted = Arc::clone(&interrupted);
            Arc::new(move |text: &str| {
                interrupted.store(true, Ordering::SeqCst);
                let error = CaptureError::StreamDisconnected(text.to_string());
                log::warn!("Capture stream error: {}", error);
                if let Some(ref d) = delegate {
                    d.on_error(&error);
                }
            })
        };

        let mut stream = provider
            .open_stream(config, device_id, on_audio, on_error)
            .map_err(|e| {
                log::error!("Failed to open stream. Error: {}", e);
                CaptureError::OpenFailed(e)
            })?;

        if let Err(e) = stream.request_start() {
            log::error!("Failed to start stream. Error: {}", e);
            if let Err(close_err) = stream.close() {
                log::warn!("Failed to close unstarted stream: {}", close_err);
            }
            return Err(CaptureError::StartFailed(e));
        }

        let id = Uuid::new_v4();
        log::info!(
            "Capture session {} started on device {} ({} Hz, {} ch)",
            id,
            device_id,
            config.sample_rate,
            config.channels
        );

        Ok(Self {
            id,
            started_at: Utc::now(),
            config: config.clone(),
            stream: Some(stream),
            shared,
            paused: false,
            interrupted,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &CaptureConfiguration {
        &self.config
    }

    pub fn status(&self) -> CaptureStatus {
        if self.stream.is_none() {
            CaptureStatus::None
        } else if self.interrupted.load(Ordering::SeqCst) {
            CaptureStatus::Interrupted
        } else if self.paused {
            CaptureStatus::Paused
        } else {
            CaptureStatus::Recording
        }
    }

    /// Copy out every buffered sample and clear the buffer.
    pub fn drain(&self) -> Vec<i16> {
        let (samples, newly_dropped) = {
            let mut s = self.shared.lock();
            let samples = s.ring.drain_all();
            s.samples_drained += samples.len() as u64;
            let total_dropped = s.ring.total_dropped();
            let newly_dropped = total_dropped - s.dropped_reported;
            s.dropped_reported = total_dropped;
            (samples, newly_dropped)
        };

        if newly_dropped > 0 {
            log::warn!(
                "Session {}: buffer overflowed, {} samples dropped since last drain",
                self.id,
                newly_dropped
            );
        }
        samples
    }

    /// Number of samples waiting to be drained.
    pub fn buffered(&self) -> usize {
        self.shared.lock().ring.count()
    }

    pub fn pause(&mut self) -> Result<(), CaptureError> {
        let stream = self.stream.as_mut().ok_or(CaptureError::NotRunning)?;
        stream.request_pause().map_err(|e| {
            log::error!("Failed to pause stream. Error: {}", e);
            CaptureError::PauseFailed(e)
        })?;
        self.paused = true;
        Ok(())
    }

    /// Request the stream to start again. Buffered samples are kept.
    pub fn resume(&mut self) -> Result<(), CaptureError> {
        let stream = self.stream.as_mut().ok_or(CaptureError::NotRunning)?;
        stream.request_start().map_err(|e| {
            log::error!("Failed to resume stream. Error: {}", e);
            CaptureError::ResumeFailed(e)
        })?;
        self.paused = false;
        self.interrupted.store(false, Ordering::SeqCst);
        Ok(())
    }

    pub fn diagnostics(&self) -> CaptureDiagnostics {
        let s = self.shared.lock();
        let received = s.ring.total_written();
        CaptureDiagnostics {
            session_id: self.id.to_string(),
            started_at: self.started_at.to_rfc3339(),
            callback_count: s.callback_count,
            samples_received: received,
            samples_dropped: s.ring.total_dropped(),
            samples_drained: s.samples_drained,
            samples_buffered: s.ring.count() as u64,
            captured_ms: self.config.duration_ms(received),
        }
    }

    /// Stop and close the stream. Undrained samples are discarded.
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Best-effort teardown; failures are logged, never returned.
    fn shutdown(&mut self) {
        let Some(mut stream) = self.stream.take() else {
            return;
        };

        if let Err(e) = stream.request_stop() {
            log::warn!("Session {}: failed to stop stream: {}", self.id, e);
        }
        if let Err(e) = stream.close() {
            log::warn!("Session {}: failed to close stream: {}", self.id, e);
        }
        drop(stream);

        let discarded = self.shared.lock().ring.count();
        if discarded > 0 {
            log::debug!(
                "Session {}: discarding {} undrained samples",
                self.id,
                discarded
            );
        }
        log::info!("Capture session {} stopped", self.id);
    }
}

impl<S: InputStream> Drop for CaptureSession<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
