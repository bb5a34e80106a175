use std::sync::Arc;

use crate::models::config::CaptureConfiguration;
use crate::models::diagnostics::CaptureDiagnostics;
use crate::models::error::CaptureError;
use crate::models::recording_chunk::RecordingChunk;
use crate::models::state::CaptureStatus;
use crate::session::capture::CaptureSession;
use crate::traits::capture_delegate::CaptureDelegate;
use crate::traits::capture_provider::CaptureProvider;

/// Start/drain/stop/pause/resume facade over at most one [`CaptureSession`].
///
/// This is the object a platform bridge keeps per plugin instance. Every
/// operation is defined whether or not a session is open:
///
/// | operation | no session            | open session                     |
/// |-----------|-----------------------|----------------------------------|
/// | `start`   | opens + starts        | `Err(AlreadyRunning)`, untouched |
/// | `drain`   | empty                 | buffered samples, buffer cleared |
/// | `stop`    | no-op                 | stop + close, session dropped    |
/// | `pause`   | `Err(NotRunning)`     | request pause                    |
/// | `resume`  | `Err(NotRunning)`     | request start                    |
pub struct Recorder<P: CaptureProvider> {
    provider: P,
    config: CaptureConfiguration,
    delegate: Option<Arc<dyn CaptureDelegate>>,
    session: Option<CaptureSession<P::Stream>>,
}

impl<P: CaptureProvider> Recorder<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, CaptureConfiguration::default())
    }

    pub fn with_config(provider: P, config: CaptureConfiguration) -> Self {
        Self {
            provider,
            config,
            delegate: None,
            session: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn CaptureDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn config(&self) -> &CaptureConfiguration {
        &self.config
    }

    /// Open and start a stream on `device_id`.
    pub fn start(&mut self, device_id: i32) -> Result<(), CaptureError> {
        if self.session.is_some() {
            log::warn!("Start requested while a capture session is already running");
            return Err(CaptureError::AlreadyRunning);
        }

        let session = CaptureSession::open(
            &mut self.provider,
            &self.config,
            device_id,
            self.delegate.clone(),
        )?;
        self.session = Some(session);
        self.notify(CaptureStatus::Recording);
        Ok(())
    }

    /// Take every sample buffered since the last drain.
    pub fn drain(&self) -> Vec<i16> {
        self.session
            .as_ref()
            .map(CaptureSession::drain)
            .unwrap_or_default()
    }

    /// Like [`Recorder::drain`], tagged with the stream format.
    pub fn drain_chunk(&self) -> RecordingChunk {
        RecordingChunk {
            samples: self.drain(),
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
        }
    }

    /// Stop and release the current session, if any.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.stop();
            self.notify(CaptureStatus::None);
        }
    }

    pub fn pause(&mut self) -> Result<(), CaptureError> {
        let session = self.session.as_mut().ok_or(CaptureError::NotRunning)?;
        session.pause()?;
        self.notify(CaptureStatus::Paused);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), CaptureError> {
        let session = self.session.as_mut().ok_or(CaptureError::NotRunning)?;
        session.resume()?;
        self.notify(CaptureStatus::Recording);
        Ok(())
    }

    pub fn status(&self) -> CaptureStatus {
        self.session
            .as_ref()
            .map(CaptureSession::status)
            .unwrap_or(CaptureStatus::None)
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn diagnostics(&self) -> Option<CaptureDiagnostics> {
        self.session.as_ref().map(CaptureSession::diagnostics)
    }

    fn notify(&self, status: CaptureStatus) {
        log::debug!("Recorder status: {}", status.as_str());
        if let Some(ref delegate) = self.delegate {
            delegate.on_status_changed(status);
        }
    }
}
