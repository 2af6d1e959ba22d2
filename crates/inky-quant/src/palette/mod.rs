//! The fixed Inky display palette
//!
//! This module defines the ordered list of renderable colors, named palette
//! indices, exact-match lookup, and the packed RGB key used by the histogram.

mod palette;

pub use palette::{display_color, lookup_index, pack, unpack, InkColor, PALETTE_ORDER, PALETTE_SIZE};
