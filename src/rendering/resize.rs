//! Bilinear RGBA resize.
//!
//! Channels, alpha included, are interpolated independently with
//! pixel-center sampling. Icons are shrunk once before quantization, so no
//! prefiltering is done for large reduction factors.

use super::png_io::RgbaImage;
use crate::error::ConvertError;

/// Map a destination index to a fractional source coordinate.
#[inline]
fn source_coord(dst: u32, src_len: u32, dst_len: u32) -> f32 {
    let scale = src_len as f32 / dst_len as f32;
    ((dst as f32 + 0.5) * scale - 0.5).clamp(0.0, (src_len - 1) as f32)
}

/// Resize `image` to `width` x `height` with bilinear interpolation.
///
/// Returns a clone when the size already matches.
pub fn resize_bilinear(
    image: &RgbaImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::UnsupportedDimensions { width, height });
    }
    if image.width == 0 || image.height == 0 {
        return Err(ConvertError::UnsupportedDimensions {
            width: image.width,
            height: image.height,
        });
    }
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for dst_y in 0..height {
        let src_y = source_coord(dst_y, image.height, height);
        let y0 = src_y.floor() as u32;
        let y1 = (y0 + 1).min(image.height - 1);
        let fy = src_y - y0 as f32;

        for dst_x in 0..width {
            let src_x = source_coord(dst_x, image.width, width);
            let x0 = src_x.floor() as u32;
            let x1 = (x0 + 1).min(image.width - 1);
            let fx = src_x - x0 as f32;

            let p00 = image.pixel(x0, y0);
            let p10 = image.pixel(x1, y0);
            let p01 = image.pixel(x0, y1);
            let p11 = image.pixel(x1, y1);

            for c in 0..4 {
                let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
                let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
                let value = top * (1.0 - fy) + bottom * fy;
                pixels.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    RgbaImage::new(width, height, pixels)
}
