//! Assertion helpers for tests.

use std::path::Path;

use inky_icons::rendering::{read_png, RgbaImage};
use inky_quant::{InkColor, Rgba8};
use pretty_assertions::assert_eq;

/// Read a written PNG, failing the test with context if it can't be decoded
pub fn load_output(path: &Path) -> RgbaImage {
    match read_png(path) {
        Ok(image) => image,
        Err(e) => panic!("Expected PNG at {}: {}", path.display(), e),
    }
}

/// Assert image has the expected dimensions
pub fn assert_dimensions(image: &RgbaImage, width: u32, height: u32) {
    assert_eq!(
        (image.width, image.height),
        (width, height),
        "Unexpected image dimensions"
    );
}

/// Assert every pixel is one of the eight display colors
pub fn assert_palette_only(image: &RgbaImage) {
    for (i, px) in image.pixels.chunks_exact(4).enumerate() {
        let color = Rgba8::new(px[0], px[1], px[2], px[3]);
        assert!(
            InkColor::ALL.iter().any(|ink| ink.rgba() == color),
            "Pixel {} ({}, {}) has non-palette color {}",
            i,
            i as u32 % image.width,
            i as u32 / image.width,
            color
        );
    }
}

/// Assert the pixel at (x, y) shows `expected`
pub fn assert_pixel(image: &RgbaImage, x: u32, y: u32, expected: InkColor) {
    let px = image.pixel(x, y);
    assert_eq!(
        Rgba8::from_bytes(px),
        expected.rgba(),
        "Pixel ({}, {}) should be {}",
        x,
        y,
        expected.name()
    );
}
