//! Fixed-length history of averaged readings.
//!
//! A ring over a preallocated buffer: pushing a value evicts the oldest one
//! in O(1) and never reallocates. Readers get a borrowed [`HistoryWindow`]
//! over the most recent points instead of a copy.

/// Fixed-capacity series of averages, oldest first
#[derive(Debug, Clone)]
pub struct HistorySeries {
    buf: Vec<f64>,
    /// Index of the oldest value in `buf`
    head: usize,
}

impl HistorySeries {
    /// Create a series of `len` zeros. `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "history length must be positive");
        Self {
            buf: vec![0.0; len.max(1)],
            head: 0,
        }
    }

    /// Number of points held; constant for the life of the series
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append a value, dropping the oldest
    pub fn push(&mut self, value: f64) {
        self.buf[self.head] = value;
        self.head = (self.head + 1) % self.buf.len();
    }

    /// Most recent value
    pub fn latest(&self) -> f64 {
        let idx = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf[idx]
    }

    /// Value at logical position `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.buf.len() {
            return None;
        }
        Some(self.buf[(self.head + index) % self.buf.len()])
    }

    /// View of every point from logical position `offset` to the newest.
    ///
    /// An offset past the end is clamped so the newest point stays visible.
    pub fn window(&self, offset: usize) -> HistoryWindow<'_> {
        let offset = offset.min(self.buf.len() - 1);
        let (wrapped, from_head) = self.buf.split_at(self.head);
        // Logical order is `from_head` followed by `wrapped`
        if offset < from_head.len() {
            HistoryWindow {
                first: &from_head[offset..],
                second: wrapped,
            }
        } else {
            HistoryWindow {
                first: &wrapped[offset - from_head.len()..],
                second: &[],
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.window(0).iter()
    }
}

/// Borrowed, read-only view of the tail of a [`HistorySeries`]
#[derive(Debug, Clone, Copy)]
pub struct HistoryWindow<'a> {
    first: &'a [f64],
    second: &'a [f64],
}

impl<'a> HistoryWindow<'a> {
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        if index < self.first.len() {
            Some(self.first[index])
        } else {
            self.second.get(index - self.first.len()).copied()
        }
    }

    /// Values oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        self.first.iter().chain(self.second.iter()).copied()
    }

    /// Highest value in the window, or 0 when every point is below zero
    pub fn max(&self) -> f64 {
        self.iter().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let series = HistorySeries::new(4);
        assert_eq!(series.len(), 4);
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![0.0; 4]);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut series = HistorySeries::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            series.push(v);
            assert_eq!(series.len(), 3);
        }
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert_eq!(series.latest(), 5.0);
        assert_eq!(series.get(0), Some(3.0));
        assert_eq!(series.get(3), None);
    }

    #[test]
    fn test_window_across_wrap() {
        let mut series = HistorySeries::new(5);
        for v in 1..=7 {
            series.push(v as f64);
        }
        // Logical content: 3 4 5 6 7
        let window = series.window(2);
        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![5.0, 6.0, 7.0]);
        assert_eq!(window.get(0), Some(5.0));
        assert_eq!(window.get(2), Some(7.0));
        assert_eq!(window.get(3), None);
        assert_eq!(window.max(), 7.0);

        for offset in 0..5 {
            let w = series.window(offset);
            assert_eq!(w.len(), 5 - offset);
            assert_eq!(w.iter().last(), Some(7.0));
        }
    }

    #[test]
    fn test_window_offset_clamped() {
        let mut series = HistorySeries::new(3);
        series.push(9.0);
        let window = series.window(10);
        assert_eq!(window.len(), 1);
        assert_eq!(window.get(0), Some(9.0));
    }
}
