pub mod icon_converter;

pub use icon_converter::{
    format_probe, format_report, palette_swatch, quantize_image, BatchSummary, IconConverter,
    IconResult,
};
