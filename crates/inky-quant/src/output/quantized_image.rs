//! QuantizedImage: palette indices plus dimensions.
//!
//! [`QuantizedImage`] stores one palette index per pixel. The indexed form is
//! canonical; RGBA output is produced on demand through
//! [`display_color`](crate::display_color).

use crate::palette::{display_color, InkColor, PALETTE_SIZE};

/// The output of [`Quantizer::quantize`](crate::Quantizer::quantize).
///
/// # Example
///
/// ```
/// use inky_quant::{InkColor, QuantizedImage};
///
/// let image = QuantizedImage::new(vec![0, 1, 7, 5], 2, 2);
/// assert_eq!(image.get(1, 1), InkColor::Yellow);
///
/// let rgba = image.to_rgba();
/// assert_eq!(&rgba[8..12], &[255, 255, 255, 0]); // Clean
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl QuantizedImage {
    /// Wrap row-major palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette entry at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds or the stored index is
    /// not a palette index.
    pub fn get(&self, x: usize, y: usize) -> InkColor {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let index = self.indices[y * self.width + x] as usize;
        match InkColor::from_index(index) {
            Some(ink) => ink,
            None => panic!("palette index {} out of range 0..={}", index, PALETTE_SIZE),
        }
    }

    /// Convert to RGBA bytes using the display palette.
    ///
    /// Transparent (`Clean`) pixels come out as `[255, 255, 255, 0]`.
    /// The returned buffer has length `width * height * 4`.
    ///
    /// # Panics
    ///
    /// Panics on any index above `PALETTE_SIZE`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.indices.len() * 4);
        for &idx in &self.indices {
            rgba.extend_from_slice(&display_color(idx as usize).to_bytes());
        }
        rgba
    }

    /// Pixel count per palette index, `Clean` last.
    ///
    /// # Panics
    ///
    /// Panics on any index above `PALETTE_SIZE`.
    pub fn color_counts(&self) -> [usize; PALETTE_SIZE + 1] {
        let mut counts = [0usize; PALETTE_SIZE + 1];
        for &idx in &self.indices {
            let idx = idx as usize;
            assert!(
                idx <= PALETTE_SIZE,
                "palette index {} out of range 0..={}",
                idx,
                PALETTE_SIZE
            );
            counts[idx] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let image = QuantizedImage::new(vec![0, 1, 2, 3, 4, 5], 3, 2);
        assert_eq!(image.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(2, 1), InkColor::Yellow);
    }

    #[test]
    fn test_to_rgba_layout() {
        let image = QuantizedImage::new(vec![0, 6], 2, 1);
        assert_eq!(image.to_rgba(), vec![0, 0, 0, 255, 255, 140, 0, 255]);
    }

    #[test]
    fn test_color_counts() {
        let image = QuantizedImage::new(vec![1, 1, 7, 4], 2, 2);
        assert_eq!(image.color_counts(), [0, 2, 0, 0, 1, 0, 0, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_to_rgba_panics_on_invalid_index() {
        let image = QuantizedImage::new(vec![0, 8], 2, 1);
        let _ = image.to_rgba();
    }

    #[test]
    #[should_panic(expected = "palette index 9 out of range")]
    fn test_color_counts_panics_on_invalid_index() {
        let image = QuantizedImage::new(vec![7, 9], 2, 1);
        let _ = image.color_counts();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_panics_on_invalid_index() {
        let image = QuantizedImage::new(vec![42], 1, 1);
        let _ = image.get(0, 0);
    }
}
