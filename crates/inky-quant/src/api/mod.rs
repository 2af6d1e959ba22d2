//! Public API for the inky-quant crate.
//!
//! This module provides the per-pixel pipeline, [`Quantizer`], and the
//! [`QuantizeError`] error type.

mod builder;
mod error;

pub use builder::{Quantizer, DEFAULT_TRANSPARENCY_ALPHA};
pub use error::QuantizeError;
