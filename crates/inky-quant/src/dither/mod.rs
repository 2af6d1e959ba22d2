//! Ordered dithering for curated source colors.
//!
//! The weather icons are drawn with a small set of known UI colors. Rather
//! than snapping those to the nearest palette entry, each one is listed in a
//! [`RemapTable`] that blends two palette colors with a 2×2 ordered
//! [`DitherPattern`], approximating tones the 7-color panel cannot show.
//!
//! # Rule Order
//!
//! Rules are scanned first to last and the first source within the distance
//! threshold wins. The order encodes priority between overlapping sources and
//! must not be replaced by a keyed lookup.

mod matrix;
mod remap;

pub use matrix::{DitherPattern, DITHER_PATTERNS};
pub use remap::{source, RemapRule, RemapTable, DEFAULT_REMAP_THRESHOLD, SOURCE_RULES};
