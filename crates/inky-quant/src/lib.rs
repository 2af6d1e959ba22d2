#![allow(clippy::module_inception)]

//! inky-quant: fixed-palette quantization for 7-color Inky e-ink displays
//!
//! This library maps decoded RGBA pixels onto the panel's seven inks
//! (Black, White, Green, Blue, Red, Yellow, Orange) plus a transparent
//! `Clean` sentinel. It performs no image I/O: callers hand in pixel values
//! and coordinates and get palette indices back.
//!
//! # Quick Start
//!
//! ```
//! use inky_quant::{HistogramCollector, InkColor, Quantizer};
//!
//! // 2x2 RGBA image: curated yellow, black, white, translucent black
//! let pixels = [
//!     255, 234, 49, 255,   0, 0, 0, 255,
//!     255, 255, 255, 255,  0, 0, 0, 100,
//! ];
//!
//! let mut histogram = HistogramCollector::new();
//! let image = Quantizer::new().quantize(&pixels, 2, 2, &mut histogram).unwrap();
//!
//! assert_eq!(image.get(0, 0), InkColor::Yellow);
//! assert_eq!(image.get(1, 1), InkColor::Clean);
//! assert_eq!(histogram.total(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! pixel (r, g, b, a) at (x, y)
//!     |
//!     +---> HistogramCollector::add      (always, for auditing)
//!     |
//!     v
//! alpha < 200? ------------------------> Clean (7)
//!     |
//!     v
//! RemapTable: first source within 3.0 -> 2x2 ordered dither between
//!     |                                  two inks by (x & 1, y & 1)
//!     | no match
//!     v
//! ColorClassifier
//!     greyscale?     -> nearer of Black / White
//!     alpha < 200?   -> index 6
//!     otherwise      -> nearest of Green, Blue, Red, Yellow, Orange
//! ```
//!
//! The curated table covers the handful of known icon colors (pale yellow,
//! light greys) and renders them as dithered blends. Anything else degrades
//! to plain nearest-color.
//!
//! # Distances
//!
//! All distances are Euclidean over raw 8-bit R, G, B values. There is no
//! gamma handling and no perceptual color space; the rule table and
//! thresholds were tuned against exactly this metric.

pub mod api;
pub mod classify;
pub mod color;
pub mod dither;
pub mod histogram;
pub mod output;
pub mod palette;


pub use api::{QuantizeError, Quantizer, DEFAULT_TRANSPARENCY_ALPHA};
pub use classify::{ColorClassifier, CLASSIFIER_ALPHA_THRESHOLD};
pub use color::{ParseColorError, Rgba8};
pub use dither::{
    source, DitherPattern, RemapRule, RemapTable, DEFAULT_REMAP_THRESHOLD, DITHER_PATTERNS,
    SOURCE_RULES,
};
pub use histogram::{ColorCount, HistogramCollector, DEFAULT_REPORT_THRESHOLD};
pub use output::QuantizedImage;
pub use palette::{display_color, lookup_index, pack, unpack, InkColor, PALETTE_ORDER, PALETTE_SIZE};
