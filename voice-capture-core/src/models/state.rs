use serde::{Deserialize, Serialize};

/// Externally visible status of the recorder.
///
/// State transitions:
/// ```text
/// none → recording ↔ paused
///            ↓          ↓
///        interrupted ──→ none (stop)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaptureStatus {
    None,
    Recording,
    Paused,
    /// The runtime reported a stream error (for example the device went away).
    /// The stream stays owned until `stop`.
    Interrupted,
}

impl CaptureStatus {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    /// Wire name used by the plugin (`"RECORDING"`, `"PAUSED"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Recording => "RECORDING",
            Self::Paused => "PAUSED",
            Self::Interrupted => "INTERRUPTED",
        }
    }
}
