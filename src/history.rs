//! Rolling buffer of recent CPU utilization readings.

/// Fixed-capacity FIFO window over the most recent N samples.
///
/// The buffer is pre-filled with zeros at construction, so its length is
/// always exactly the capacity; an unfilled dashboard renders as a flat
/// baseline rather than a growing graph. Implemented as an array-backed
/// circular buffer with a write cursor.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: Vec<f64>,
    cursor: usize,
}

impl HistoryBuffer {
    /// Creates a buffer of `capacity` slots, all initialized to 0.0.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a zero-length rolling window has no
    /// meaning for the renderers.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            samples: vec![0.0; capacity],
            cursor: 0,
        }
    }

    /// Appends a value, evicting the oldest one.
    pub fn push(&mut self, value: f64) {
        self.samples[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.samples.len();
    }

    /// Returns the current window, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.samples.len());
        out.extend_from_slice(&self.samples[self.cursor..]);
        out.extend_from_slice(&self.samples[..self.cursor]);
        out
    }

    /// Number of slots in the window. Also the length: the buffer is
    /// always full.
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// The most recently pushed value.
    pub fn latest(&self) -> f64 {
        let last = (self.cursor + self.samples.len() - 1) % self.samples.len();
        self.samples[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_prefilled_with_zeros() {
        for capacity in [1, 5, 30] {
            let buffer = HistoryBuffer::new(capacity);
            let values = buffer.snapshot();
            assert_eq!(values.len(), capacity);
            assert!(values.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    #[should_panic(expected = "history capacity must be positive")]
    fn zero_capacity_panics() {
        HistoryBuffer::new(0);
    }

    #[test]
    fn length_is_constant_under_pushes() {
        let mut buffer = HistoryBuffer::new(4);
        for i in 0..10 {
            buffer.push(i as f64);
            assert_eq!(buffer.snapshot().len(), 4);
        }
    }

    #[test]
    fn push_keeps_most_recent_value_last() {
        let mut buffer = HistoryBuffer::new(3);
        buffer.push(10.0);
        assert_eq!(buffer.latest(), 10.0);
        assert_eq!(buffer.snapshot(), vec![0.0, 0.0, 10.0]);

        buffer.push(20.0);
        assert_eq!(buffer.latest(), 20.0);
        assert_eq!(buffer.snapshot(), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn oldest_values_are_evicted_fifo() {
        let mut buffer = HistoryBuffer::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buffer.push(v);
        }
        // 1.0 and 2.0 fell out of the window
        assert_eq!(buffer.snapshot(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn snapshot_is_ordered_oldest_first_across_wraparound() {
        let mut buffer = HistoryBuffer::new(4);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            buffer.push(v);
        }
        assert_eq!(buffer.snapshot(), vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(buffer.capacity(), 4);
    }
}
