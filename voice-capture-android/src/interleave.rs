//! Stereo frame flattening for the realtime callback.

/// Frames flattened per slice handed to the sink.
pub const CHUNK_FRAMES: usize = 512;

/// Flatten `(left, right)` frames into interleaved samples, passing them to
/// `sink` in arrival order, at most [`CHUNK_FRAMES`] frames per call.
///
/// Works out of a fixed stack buffer, so bursts of any size are forwarded
/// without touching the heap.
pub fn for_each_interleaved(frames: &[(i16, i16)], mut sink: impl FnMut(&[i16])) {
    let mut interleaved = [0i16; CHUNK_FRAMES * 2];
    for chunk in frames.chunks(CHUNK_FRAMES) {
        for (slot, &(left, right)) in interleaved.chunks_exact_mut(2).zip(chunk) {
            slot[0] = left;
            slot[1] = right;
        }
        sink(&interleaved[..chunk.len() * 2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(frames: &[(i16, i16)]) -> (Vec<i16>, usize) {
        let mut out = Vec::new();
        let mut calls = 0;
        for_each_interleaved(frames, |samples| {
            calls += 1;
            out.extend_from_slice(samples);
        });
        (out, calls)
    }

    #[test]
    fn small_burst_is_one_slice() {
        let (out, calls) = collect(&[(1, -1), (2, -2), (3, -3)]);
        assert_eq!(out, vec![1, -1, 2, -2, 3, -3]);
        assert_eq!(calls, 1);
    }

    #[test]
    fn empty_burst_forwards_nothing() {
        let (out, calls) = collect(&[]);
        assert!(out.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn oversized_burst_is_split_in_order() {
        let frames: Vec<(i16, i16)> = (0..CHUNK_FRAMES as i16 * 2 + 7)
            .map(|i| (i, -i))
            .collect();
        let expected: Vec<i16> = frames.iter().flat_map(|&(l, r)| [l, r]).collect();

        let mut sizes = Vec::new();
        let mut out = Vec::new();
        for_each_interleaved(&frames, |samples| {
            sizes.push(samples.len());
            out.extend_from_slice(samples);
        });

        assert_eq!(out, expected);
        assert_eq!(sizes, vec![CHUNK_FRAMES * 2, CHUNK_FRAMES * 2, 14]);
    }
}
