use std::collections::HashMap;

use crate::color::Rgba8;
use crate::palette::{pack, unpack};

/// Count threshold used by the audit report unless told otherwise.
pub const DEFAULT_REPORT_THRESHOLD: u64 = 500;

/// One line of a histogram report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    /// Reported color; alpha is always 255 since the key does not carry it.
    pub color: Rgba8,
    /// Number of pixels seen with this RGB value.
    pub count: u64,
}

/// Running per-color pixel counts.
///
/// # Example
///
/// ```
/// use inky_quant::{HistogramCollector, Rgba8};
///
/// let mut histogram = HistogramCollector::new();
/// for _ in 0..3 {
///     histogram.add(Rgba8::opaque(34, 160, 239));
/// }
/// histogram.add(Rgba8::new(34, 160, 239, 0)); // alpha does not matter
///
/// let report = histogram.report(2);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].count, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistogramCollector {
    counts: HashMap<u32, u64>,
}

impl HistogramCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `color`.
    #[inline]
    pub fn add(&mut self, color: Rgba8) {
        *self.counts.entry(pack(color)).or_insert(0) += 1;
    }

    /// Occurrences recorded for the RGB value of `color`.
    pub fn count(&self, color: Rgba8) -> u64 {
        self.counts.get(&pack(color)).copied().unwrap_or(0)
    }

    /// Number of distinct RGB values seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of pixels recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Fold another collector's counts into this one.
    pub fn merge(&mut self, other: HistogramCollector) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    /// Colors seen strictly more than `threshold` times.
    ///
    /// Sorted by descending count, then by packed RGB key, so the output is
    /// stable across runs.
    pub fn report(&self, threshold: u64) -> Vec<ColorCount> {
        let mut entries: Vec<(u32, u64)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > threshold)
            .map(|(&key, &count)| (key, count))
            .collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        tracing::debug!(
            threshold,
            distinct = self.counts.len(),
            reported = entries.len(),
            "Histogram report"
        );

        entries
            .into_iter()
            .map(|(key, count)| ColorCount {
                color: unpack(key),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn add_n(histogram: &mut HistogramCollector, color: Rgba8, n: u64) {
        for _ in 0..n {
            histogram.add(color);
        }
    }

    #[test]
    fn test_new_is_empty() {
        let histogram = HistogramCollector::new();
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert!(histogram.report(0).is_empty());
    }

    #[test]
    fn test_repeated_add_counts_exactly() {
        let mut histogram = HistogramCollector::new();
        let color = Rgba8::opaque(224, 217, 181);
        add_n(&mut histogram, color, 1234);
        assert_eq!(histogram.count(color), 1234);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.total(), 1234);
    }

    #[test]
    fn test_alpha_shares_key() {
        let mut histogram = HistogramCollector::new();
        histogram.add(Rgba8::new(1, 2, 3, 255));
        histogram.add(Rgba8::new(1, 2, 3, 0));
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(Rgba8::new(1, 2, 3, 77)), 2);
    }

    #[test]
    fn test_report_threshold_is_exclusive() {
        let mut histogram = HistogramCollector::new();
        let above = Rgba8::opaque(255, 234, 49);
        let at = Rgba8::opaque(34, 160, 239);
        let below = Rgba8::opaque(0, 0, 0);
        add_n(&mut histogram, above, 501);
        add_n(&mut histogram, at, 500);
        add_n(&mut histogram, below, 10);

        let report = histogram.report(DEFAULT_REPORT_THRESHOLD);
        let colors: HashSet<Rgba8> = report.iter().map(|c| c.color).collect();
        assert_eq!(colors, HashSet::from([above]));
        assert_eq!(report[0].count, 501);
    }

    #[test]
    fn test_report_sorted_by_count_then_key() {
        let mut histogram = HistogramCollector::new();
        add_n(&mut histogram, Rgba8::opaque(0, 0, 2), 3);
        add_n(&mut histogram, Rgba8::opaque(0, 0, 1), 3);
        add_n(&mut histogram, Rgba8::opaque(9, 9, 9), 7);

        let report = histogram.report(0);
        let order: Vec<(Rgba8, u64)> = report.iter().map(|c| (c.color, c.count)).collect();
        assert_eq!(
            order,
            [
                (Rgba8::opaque(9, 9, 9), 7),
                (Rgba8::opaque(0, 0, 1), 3),
                (Rgba8::opaque(0, 0, 2), 3),
            ]
        );
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut a = HistogramCollector::new();
        let mut b = HistogramCollector::new();
        let shared = Rgba8::opaque(120, 120, 120);
        let only_b = Rgba8::opaque(254, 84, 22);
        add_n(&mut a, shared, 4);
        add_n(&mut b, shared, 6);
        add_n(&mut b, only_b, 2);

        a.merge(b);
        assert_eq!(a.count(shared), 10);
        assert_eq!(a.count(only_b), 2);
        assert_eq!(a.total(), 12);
    }
}
