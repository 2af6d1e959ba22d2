//! Error type for whole-image quantization.

use std::fmt;

/// Error returned by [`Quantizer::quantize`](crate::Quantizer::quantize).
///
/// Classification itself never fails; only malformed pixel buffers are
/// rejected.
///
/// # Example
///
/// ```
/// use inky_quant::{HistogramCollector, QuantizeError, Quantizer};
///
/// let mut histogram = HistogramCollector::new();
/// let err = Quantizer::new()
///     .quantize(&[0, 0, 0], 1, 1, &mut histogram)
///     .unwrap_err();
/// assert_eq!(err, QuantizeError::BufferSize { expected: 4, actual: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// RGBA buffer length does not equal `width * height * 4`
    BufferSize {
        /// Required length in bytes
        expected: usize,
        /// Length of the buffer passed in
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`
    DimensionOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, expected {} (RGBA8)",
                    actual, expected
                )
            }
            QuantizeError::DimensionOverflow { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for QuantizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QuantizeError::BufferSize {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "pixel buffer has 12 bytes, expected 16 (RGBA8)"
        );

        let err = QuantizeError::DimensionOverflow {
            width: usize::MAX,
            height: 2,
        };
        assert!(err.to_string().ends_with("are too large"));
    }
}
