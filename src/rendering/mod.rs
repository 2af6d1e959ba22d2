//! Image I/O and geometry helpers around the quantizer.
//!
//! The quantizer itself only sees RGBA8 pixels; this module gets icons into
//! and out of that form.

pub mod png_io;
pub mod resize;

pub use png_io::{decode_png, encode_png, read_png, write_png, RgbaImage};
pub use resize::resize_bilinear;
