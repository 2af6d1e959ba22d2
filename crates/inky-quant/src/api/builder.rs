//! Quantizer -- the per-pixel quantization pipeline.
//!
//! [`Quantizer`] composes the curated [`RemapTable`] and the generic
//! [`ColorClassifier`] behind a small builder, and drives a
//! [`HistogramCollector`] when processing whole images.

use super::error::QuantizeError;
use crate::classify::ColorClassifier;
use crate::color::Rgba8;
use crate::dither::RemapTable;
use crate::histogram::HistogramCollector;
use crate::output::QuantizedImage;
use crate::palette::InkColor;

/// Pixels with alpha strictly below this are written as `Clean` by default.
pub const DEFAULT_TRANSPARENCY_ALPHA: u8 = 200;

/// Fixed-palette quantizer for Inky displays.
///
/// Per pixel:
/// 1. record the color in the histogram (when one is supplied),
/// 2. if alpha is below the transparency cut-off, return `Clean`,
/// 3. try the curated remap table (ordered dithering of known UI colors),
/// 4. otherwise fall back to nearest-color classification.
///
/// `Quantizer` holds only immutable configuration, so one instance can be
/// shared across threads; each worker brings its own histogram.
///
/// # Example
///
/// ```
/// use inky_quant::{InkColor, Quantizer, Rgba8};
///
/// let quantizer = Quantizer::new().remap_threshold(3.0);
///
/// assert_eq!(quantizer.classify(Rgba8::opaque(250, 80, 46), 0, 0), InkColor::Red);
/// assert_eq!(quantizer.classify(Rgba8::new(0, 0, 0, 100), 0, 0), InkColor::Clean);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    remap: RemapTable,
    classifier: ColorClassifier,
    transparency_alpha: u8,
}

impl Quantizer {
    /// Create a quantizer with the built-in rule table, a 3.0 remap
    /// threshold and a transparency cut-off of alpha 200.
    pub const fn new() -> Self {
        Self {
            remap: RemapTable::new(),
            classifier: ColorClassifier::new(),
            transparency_alpha: DEFAULT_TRANSPARENCY_ALPHA,
        }
    }

    /// Set the match radius for curated source colors.
    #[inline]
    pub fn remap_threshold(mut self, threshold: f32) -> Self {
        self.remap = self.remap.with_threshold(threshold);
        self
    }

    /// Set the pipeline transparency cut-off. Pixels with alpha strictly
    /// below `alpha` become `Clean`; `0` disables the check.
    #[inline]
    pub fn transparency_alpha(mut self, alpha: u8) -> Self {
        self.transparency_alpha = alpha;
        self
    }

    /// The curated remap table in use.
    #[inline]
    pub fn remap_table(&self) -> &RemapTable {
        &self.remap
    }

    /// Current transparency cut-off.
    #[inline]
    pub fn transparency_cutoff(&self) -> u8 {
        self.transparency_alpha
    }

    /// Classify one pixel at `(x, y)`.
    ///
    /// Never fails: every color maps to a palette entry or `Clean`.
    #[inline]
    pub fn classify(&self, color: Rgba8, x: u32, y: u32) -> InkColor {
        if color.a < self.transparency_alpha {
            return InkColor::Clean;
        }

        match self.remap.remap(color, x, y) {
            Some(ink) => ink,
            None => self.classifier.classify(color),
        }
    }

    /// Record `color` in `histogram`, then classify it.
    #[inline]
    pub fn classify_recorded(
        &self,
        color: Rgba8,
        x: u32,
        y: u32,
        histogram: &mut HistogramCollector,
    ) -> InkColor {
        histogram.add(color);
        self.classify(color, x, y)
    }

    /// Quantize a row-major RGBA8 buffer.
    ///
    /// Every pixel is recorded in `histogram`, including transparent ones.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizeError::BufferSize`] if `rgba.len()` is not
    /// `width * height * 4`.
    pub fn quantize(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
        histogram: &mut HistogramCollector,
    ) -> Result<QuantizedImage, QuantizeError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(QuantizeError::DimensionOverflow { width, height })?;
        if rgba.len() != expected {
            return Err(QuantizeError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let mut indices = Vec::with_capacity(width * height);
        for (i, pixel) in rgba.chunks_exact(4).enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            let color = Rgba8::new(pixel[0], pixel[1], pixel[2], pixel[3]);
            indices.push(self.classify_recorded(color, x, y, histogram) as u8);
        }

        let image = QuantizedImage::new(indices, width, height);
        tracing::debug!(
            width,
            height,
            counts = ?image.color_counts(),
            "Quantized image"
        );
        Ok(image)
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}
