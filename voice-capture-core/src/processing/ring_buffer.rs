/// Fixed-capacity circular buffer of interleaved 16-bit samples.
///
/// Storage is allocated once in [`RingBuffer::new`]; `write` never allocates,
/// which keeps it safe to call from the realtime audio callback. Wrap in
/// `Arc<parking_lot::Mutex<RingBuffer>>` for cross-thread access.
///
/// Overflow behavior: drops the oldest samples and counts them.
#[derive(Debug)]
pub struct RingBuffer {
    buffer: Vec<i16>,
    write_index: usize,
    read_index: usize,
    available: usize,
    total_written: u64,
    total_dropped: u64,
}

impl RingBuffer {
    /// Create a buffer holding up to `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity.max(1)],
            write_index: 0,
            read_index: 0,
            available: 0,
            total_written: 0,
            total_dropped: 0,
        }
    }

    /// Append samples in arrival order.
    ///
    /// If the buffer overflows, the oldest samples are dropped.
    /// If `samples` is larger than capacity, only the last `capacity` samples are kept.
    /// Returns the number of samples dropped by this call.
    pub fn write(&mut self, samples: &[i16]) -> usize {
        if samples.is_empty() {
            return 0;
        }
        let capacity = self.capacity();
        self.total_written += samples.len() as u64;

        let mut dropped = 0;
        let samples = if samples.len() > capacity {
            dropped += samples.len() - capacity;
            &samples[samples.len() - capacity..]
        } else {
            samples
        };

        let overflow = (self.available + samples.len()).saturating_sub(capacity);
        if overflow > 0 {
            self.read_index = (self.read_index + overflow) % capacity;
            self.available -= overflow;
            dropped += overflow;
        }

        // At most two contiguous copies: up to the end of storage, then from the start.
        let first = samples.len().min(capacity - self.write_index);
        self.buffer[self.write_index..self.write_index + first].copy_from_slice(&samples[..first]);
        let rest = samples.len() - first;
        self.buffer[..rest].copy_from_slice(&samples[first..]);

        self.write_index = (self.write_index + samples.len()) % capacity;
        self.available += samples.len();
        self.total_dropped += dropped as u64;
        dropped
    }

    /// Read and remove up to `count` samples from the buffer.
    ///
    /// Returns fewer samples if fewer are available.
    pub fn read(&mut self, count: usize) -> Vec<i16> {
        let to_read = count.min(self.available);
        if to_read == 0 {
            return Vec::new();
        }

        let capacity = self.capacity();
        let mut result = Vec::with_capacity(to_read);
        let first = to_read.min(capacity - self.read_index);
        result.extend_from_slice(&self.buffer[self.read_index..self.read_index + first]);
        result.extend_from_slice(&self.buffer[..to_read - first]);

        self.read_index = (self.read_index + to_read) % capacity;
        self.available -= to_read;
        result
    }

    /// Copy out everything currently buffered and leave the buffer empty.
    pub fn drain_all(&mut self) -> Vec<i16> {
        let samples = self.read(self.available);
        self.reset();
        samples
    }

    /// Number of samples currently available for reading.
    pub fn count(&self) -> usize {
        self.available
    }

    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Reset the read/write positions. Lifetime counters are kept.
    pub fn reset(&mut self) {
        self.write_index = 0;
        self.read_index = 0;
        self.available = 0;
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Samples accepted by `write` since creation, including dropped ones.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Samples discarded by overflow since creation.
    pub fn total_dropped(&self) -> u64 {
        self.total_dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_write_read() {
        let mut buf = RingBuffer::new(10);
        buf.write(&[1, 2, 3]);

        assert_eq!(buf.count(), 3);
        assert_eq!(buf.read(3), vec![1, 2, 3]);
        assert!(buf.is_empty());
    }

    #[test]
    fn read_partial() {
        let mut buf = RingBuffer::new(10);
        buf.write(&[1, 2, 3, 4, 5]);

        assert_eq!(buf.read(3), vec![1, 2, 3]);
        assert_eq!(buf.count(), 2);

        let rest = buf.read(10);
        assert_eq!(rest, vec![4, 5]);
        assert!(buf.is_empty());
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut buf = RingBuffer::new(4);
        assert_eq!(buf.write(&[1, 2, 3, 4]), 0);
        assert_eq!(buf.write(&[5, 6]), 2);

        assert_eq!(buf.count(), 4);
        assert_eq!(buf.read(4), vec![3, 4, 5, 6]);
        assert_eq!(buf.total_dropped(), 2);
        assert_eq!(buf.total_written(), 6);
    }

    #[test]
    fn write_larger_than_capacity() {
        let mut buf = RingBuffer::new(3);
        assert_eq!(buf.write(&[1, 2, 3, 4, 5]), 2);

        assert_eq!(buf.count(), 3);
        assert_eq!(buf.read(3), vec![3, 4, 5]);
    }

    #[test]
    fn oversized_write_on_top_of_existing_data() {
        let mut buf = RingBuffer::new(3);
        buf.write(&[1, 2]);
        assert_eq!(buf.write(&[3, 4, 5, 6]), 3);
        assert_eq!(buf.drain_all(), vec![4, 5, 6]);
        assert_eq!(buf.total_dropped(), 3);
    }

    #[test]
    fn wraparound() {
        let mut buf = RingBuffer::new(4);

        buf.write(&[1, 2, 3]);
        buf.read(2);

        buf.write(&[4, 5, 6]);

        assert_eq!(buf.count(), 4);
        assert_eq!(buf.read(4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn drain_all_empties_and_keeps_counters() {
        let mut buf = RingBuffer::new(8);
        buf.write(&[1, 2, 3]);
        buf.read(1);
        buf.write(&[4, 5, 6, 7, 8, 9]);

        assert_eq!(buf.drain_all(), vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(buf.is_empty());
        assert!(buf.drain_all().is_empty());
        assert_eq!(buf.total_written(), 9);
        assert_eq!(buf.total_dropped(), 0);
    }

    #[test]
    fn reset_clears_buffer() {
        let mut buf = RingBuffer::new(10);
        buf.write(&[1, 2, 3]);
        buf.reset();

        assert!(buf.is_empty());
        assert!(buf.read(10).is_empty());
    }

    #[test]
    fn empty_operations() {
        let mut buf = RingBuffer::new(10);

        assert!(buf.read(5).is_empty());
        assert_eq!(buf.write(&[]), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut buf = RingBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.write(&[1, 2]);
        assert_eq!(buf.drain_all(), vec![2]);
    }
}
