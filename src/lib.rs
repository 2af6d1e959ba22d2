//! inky-icons - weather icons for 7-color Inky e-ink displays
//!
//! Batch driver around the `inky-quant` quantizer: PNG I/O, resizing,
//! configuration and the per-icon conversion flow.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
