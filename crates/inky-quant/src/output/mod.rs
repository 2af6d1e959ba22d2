//! Quantization output types

mod quantized_image;

pub use quantized_image::QuantizedImage;
