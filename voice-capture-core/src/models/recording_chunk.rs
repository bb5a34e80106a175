use crate::models::config::SAMPLE_BIT_DEPTH;
use crate::processing::wav_format;

/// MIME type of [`RecordingChunk::to_wav`] output.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// A block of drained samples with the format they were captured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingChunk {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl RecordingChunk {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Duration of the chunk, truncated to whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frame_count() as u64 * 1000 / self.sample_rate.max(1) as u64
    }

    /// Package the samples as a complete 16-bit PCM WAV byte stream.
    pub fn to_wav(&self) -> Vec<u8> {
        wav_format::encode_pcm16(&self.samples, self.sample_rate, self.channels)
    }

    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    pub fn bit_depth(&self) -> u16 {
        SAMPLE_BIT_DEPTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo(samples: Vec<i16>) -> RecordingChunk {
        RecordingChunk {
            samples,
            sample_rate: 44100,
            channels: 2,
        }
    }

    #[test]
    fn duration_counts_frames_not_samples() {
        let chunk = stereo(vec![0; 88200]);
        assert_eq!(chunk.frame_count(), 44100);
        assert_eq!(chunk.duration_ms(), 1000);
    }

    #[test]
    fn empty_chunk_still_encodes_header() {
        let chunk = stereo(Vec::new());
        assert!(chunk.is_empty());
        assert_eq!(chunk.duration_ms(), 0);
        assert_eq!(chunk.to_wav().len(), wav_format::WAV_HEADER_SIZE);
        assert_eq!(chunk.mime_type(), "audio/wav");
        assert_eq!(chunk.bit_depth(), 16);
    }
}
