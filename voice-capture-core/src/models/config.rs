use serde::{Deserialize, Serialize};

/// Bit depth of every sample delivered by the capture stream.
pub const SAMPLE_BIT_DEPTH: u16 = 16;

/// Highest sample rate accepted by [`CaptureConfiguration::validate`].
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest buffer accepted by [`CaptureConfiguration::validate`], in seconds.
pub const MAX_BUFFER_CAPACITY_SECS: f64 = 3600.0;

/// Scheduling profile requested from the audio runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceMode {
    None,
    PowerSaving,
    LowLatency,
}

/// Whether the stream may share the input device with other clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharingMode {
    Exclusive,
    Shared,
}

/// Configuration for a capture stream.
///
/// The defaults are the fixed parameters exposed to the plugin:
/// 44.1 kHz stereo, signed 16-bit, exclusive low-latency input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfiguration {
    /// Sample rate in Hz (default: 44100).
    pub sample_rate: u32,

    /// Interleaved channel count (default: 2).
    pub channels: u16,

    /// Performance mode (default: low latency).
    pub performance_mode: PerformanceMode,

    /// Sharing mode (default: exclusive).
    pub sharing_mode: SharingMode,

    /// Seconds of audio retained between drains before the oldest samples
    /// are dropped (default: 30).
    pub buffer_capacity_secs: f64,
}

impl CaptureConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(format!(
                "sample rate must be within 1..={} Hz: {}",
                MAX_SAMPLE_RATE, self.sample_rate
            ));
        }
        if ![1, 2].contains(&self.channels) {
            return Err(format!("unsupported channel count: {}", self.channels));
        }
        if !(self.buffer_capacity_secs > 0.0
            && self.buffer_capacity_secs <= MAX_BUFFER_CAPACITY_SECS)
        {
            return Err(format!(
                "buffer capacity must be within (0, {}] seconds: {}",
                MAX_BUFFER_CAPACITY_SECS, self.buffer_capacity_secs
            ));
        }
        Ok(())
    }

    /// Number of interleaved samples the session buffer holds, or `None`
    /// when the product does not fit in memory.
    pub fn buffer_capacity_samples(&self) -> Option<usize> {
        let frames = (self.sample_rate as f64 * self.buffer_capacity_secs).ceil();
        if !frames.is_finite() || frames >= usize::MAX as f64 {
            return None;
        }
        let samples = (frames as usize).checked_mul(self.channels as usize)?;
        Some(samples.max(self.channels as usize))
    }

    /// Milliseconds of audio represented by `samples` interleaved samples.
    pub fn duration_ms(&self, samples: u64) -> u64 {
        let frames = samples / self.channels.max(1) as u64;
        frames * 1000 / self.sample_rate.max(1) as u64
    }
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            performance_mode: PerformanceMode::LowLatency,
            sharing_mode: SharingMode::Exclusive,
            buffer_capacity_secs: 30.0,
        }
    }
}
