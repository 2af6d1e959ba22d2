use crate::color::Rgba8;
use crate::palette::{InkColor, PALETTE_SIZE};

/// Colors with alpha strictly below this are transparent to the classifier.
pub const CLASSIFIER_ALPHA_THRESHOLD: u8 = 200;

/// Chromatic candidates: palette indices 2 through 6. Black and White are
/// reserved for the greyscale path.
const CHROMATIC_RANGE: std::ops::Range<usize> = 2..PALETTE_SIZE;

/// Generic nearest-color classifier over the fixed palette.
///
/// Total over all inputs: every color maps to some [`InkColor`].
///
/// # Example
///
/// ```
/// use inky_quant::{ColorClassifier, InkColor, Rgba8};
///
/// let classifier = ColorClassifier::new();
/// assert_eq!(classifier.classify(Rgba8::opaque(40, 40, 40)), InkColor::Black);
/// assert_eq!(classifier.classify(Rgba8::opaque(200, 30, 20)), InkColor::Red);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorClassifier;

impl ColorClassifier {
    /// Create a classifier.
    pub const fn new() -> Self {
        Self
    }

    /// Pick a palette entry for `color`.
    pub fn classify(&self, color: Rgba8) -> InkColor {
        if color.is_greyscale() {
            return Self::nearest_achromatic(color);
        }

        if color.a < CLASSIFIER_ALPHA_THRESHOLD {
            return InkColor::ALL[PALETTE_SIZE - 1];
        }

        Self::nearest_chromatic(color)
    }

    fn nearest_achromatic(color: Rgba8) -> InkColor {
        let black_dist = InkColor::Black.rgba().distance(color);
        let white_dist = InkColor::White.rgba().distance(color);
        if black_dist < white_dist {
            InkColor::Black
        } else {
            InkColor::White
        }
    }

    fn nearest_chromatic(color: Rgba8) -> InkColor {
        let mut best = InkColor::ALL[CHROMATIC_RANGE.start];
        let mut best_dist = f32::MAX;

        for ink in &InkColor::ALL[CHROMATIC_RANGE] {
            let dist = ink.rgba().distance(color);
            if dist < best_dist {
                best = *ink;
                best_dist = dist;
            }
        }

        best
    }
}
