//! PNG decoding to RGBA8 and encoding from RGBA8.

use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;

/// Decoded image: row-major RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Wrap an RGBA8 buffer, checking its length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ConvertError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ConvertError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// RGBA bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Decode PNG bytes of any color type into RGBA8.
///
/// Palette and low bit depth images are expanded, 16-bit channels are
/// stripped to 8 bits, and missing alpha is filled with 255.
pub fn decode_png(data: &[u8]) -> Result<RgbaImage, ConvertError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    buf.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ConvertError::UnsupportedFormat(format!(
            "bit depth {:?} after expansion",
            frame.bit_depth
        )));
    }

    let pixel_count = frame.width as usize * frame.height as usize;
    let pixels = match frame.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for px in buf.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            rgba
        }
        png::ColorType::Grayscale => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for &v in &buf {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
            rgba
        }
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for px in buf.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            rgba
        }
        png::ColorType::Indexed => {
            return Err(ConvertError::UnsupportedFormat(
                "indexed PNG without palette".to_string(),
            ))
        }
    };

    RgbaImage::new(frame.width, frame.height, pixels)
}

/// Encode an RGBA8 image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(&image.pixels)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, ConvertError> {
    let data = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    decode_png(&data)
}

/// Encode and write a PNG file, creating parent directories as needed.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes).map_err(|e| ConvertError::io(path, e))
}
