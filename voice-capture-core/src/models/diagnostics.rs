use serde::{Deserialize, Serialize};

/// Counters for debugging a capture session.
///
/// Sample counts are interleaved samples, not frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDiagnostics {
    pub session_id: String,
    /// RFC 3339 UTC timestamp of the successful start.
    pub started_at: String,
    pub callback_count: u64,
    pub samples_received: u64,
    pub samples_dropped: u64,
    pub samples_drained: u64,
    pub samples_buffered: u64,
    /// Duration of audio received so far, in milliseconds.
    pub captured_ms: u64,
}

impl CaptureDiagnostics {
    /// camelCase JSON as handed to the plugin.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_keys() {
        let diag = CaptureDiagnostics {
            session_id: "abc".into(),
            started_at: "2024-01-01T00:00:00+00:00".into(),
            callback_count: 3,
            samples_received: 600,
            samples_dropped: 0,
            samples_drained: 400,
            samples_buffered: 200,
            captured_ms: 6,
        };
        let value: serde_json::Value = serde_json::from_str(&diag.to_json().unwrap()).unwrap();
        assert_eq!(value["sessionId"], "abc");
        assert_eq!(value["samplesBuffered"], 200);
        assert_eq!(value["capturedMs"], 6);
    }
}
