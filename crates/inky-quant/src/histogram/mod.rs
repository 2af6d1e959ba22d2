//! Color frequency histogram for auditing quantization input.
//!
//! A [`HistogramCollector`] counts every pixel it is shown, keyed by packed
//! RGB, regardless of how the pixel was classified. Reporting the colors
//! above a count threshold reveals which artwork colors are common enough to
//! deserve a curated [`RemapRule`](crate::RemapRule).
//!
//! Collectors are plain owned values. A batch run shares one collector
//! across all images; parallel workers each own one and [`merge`] at the end.
//!
//! [`merge`]: HistogramCollector::merge

mod collector;

pub use collector::{ColorCount, HistogramCollector, DEFAULT_REPORT_THRESHOLD};
