//! Color value type and raw RGB distance
//!
//! Quantization operates directly on decoded 8-bit RGBA pixels. There is no
//! color-space conversion: all distances are plain Euclidean distances over
//! the red, green and blue channels, with alpha never contributing.
//!
//! # Example
//!
//! ```
//! use inky_quant::Rgba8;
//!
//! let pale_yellow = Rgba8::new(224, 217, 181, 255);
//! let white = Rgba8::opaque(255, 255, 255);
//!
//! assert!(pale_yellow.distance(white) > 3.0);
//! assert!(!pale_yellow.is_greyscale());
//! ```

mod error;
mod rgba;

pub use error::ParseColorError;
pub use rgba::Rgba8;
