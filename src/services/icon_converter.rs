use std::path::{Path, PathBuf};

use std::fmt::Write as _;

use inky_quant::{ColorCount, HistogramCollector, InkColor, Quantizer, Rgba8, PALETTE_SIZE};

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::{read_png, resize_bilinear, write_png, RgbaImage};

/// Result of converting one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconResult {
    /// Icon file name
    pub name: String,
    /// Written output file
    pub output: PathBuf,
    /// Pixel count per palette index, `Clean` last
    pub color_counts: [usize; PALETTE_SIZE + 1],
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Icons written successfully, in processing order
    pub converted: Vec<IconResult>,
    /// (icon name, error message)
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    /// True when no icon failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Quantize a decoded image, recording every pixel in `histogram`.
///
/// The result is an RGBA image in display colors; transparent pixels become
/// `(255, 255, 255, 0)`.
pub fn quantize_image(
    quantizer: &Quantizer,
    image: &RgbaImage,
    histogram: &mut HistogramCollector,
) -> Result<(RgbaImage, [usize; PALETTE_SIZE + 1]), ConvertError> {
    let quantized = quantizer.quantize(
        &image.pixels,
        image.width as usize,
        image.height as usize,
        histogram,
    )?;
    let counts = quantized.color_counts();
    let rgba = RgbaImage::new(image.width, image.height, quantized.to_rgba())?;
    Ok((rgba, counts))
}

/// Swatch image with one pixel per active palette color.
pub fn palette_swatch() -> RgbaImage {
    let pixels: Vec<u8> = InkColor::ACTIVE
        .iter()
        .flat_map(|ink| ink.rgba().to_bytes())
        .collect();
    RgbaImage {
        width: PALETTE_SIZE as u32,
        height: 1,
        pixels,
    }
}

/// Render histogram report rows, one `r, g, b, count` line per color.
///
/// With `json`, the rows are rendered as a pretty-printed JSON array of
/// `{"color", "rgb", "count"}` objects instead.
pub fn format_report(report: &[ColorCount], json: bool) -> Result<String, serde_json::Error> {
    if json {
        let entries: Vec<serde_json::Value> = report
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "color": entry.color.to_string(),
                    "rgb": [entry.color.r, entry.color.g, entry.color.b],
                    "count": entry.count,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&entries);
    }

    let mut out = String::new();
    for entry in report {
        let c = entry.color;
        let _ = writeln!(out, "{}, {}, {}, {}", c.r, c.g, c.b, entry.count);
    }
    Ok(out)
}

/// Describe how `color` is classified at pixel `(x, y)`:
/// `(r, g, b): (pr, pg, pb) <is_greyscale> -> <ink>`.
pub fn format_probe(quantizer: &Quantizer, color: Rgba8, x: u32, y: u32) -> String {
    let ink = quantizer.classify(color, x, y);
    let out = ink.rgba();
    format!(
        "({}, {}, {}): ({}, {}, {}) {} -> {}",
        color.r,
        color.g,
        color.b,
        out.r,
        out.g,
        out.b,
        color.is_greyscale(),
        ink.name()
    )
}

/// Converts source icons into Inky-palette PNGs.
///
/// One converter is one run: its histogram accumulates over every icon it
/// converts.
pub struct IconConverter {
    config: AppConfig,
    quantizer: Quantizer,
    histogram: HistogramCollector,
}

impl IconConverter {
    /// Create a converter with an empty histogram and the quantizer
    /// described by `config`.
    pub fn new(config: AppConfig) -> Self {
        let quantizer = config.quantizer();
        Self {
            config,
            quantizer,
            histogram: HistogramCollector::new(),
        }
    }

    /// Load, resize, quantize and save a single icon
    pub fn convert_icon(&mut self, name: &str) -> Result<IconResult, ConvertError> {
        let source = self.config.source_dir.join(name);
        let output = self.config.output_dir.join(name);

        let image = read_png(&source)?;
        tracing::debug!(
            icon = %name,
            width = image.width,
            height = image.height,
            "Loaded icon"
        );

        let resized = resize_bilinear(&image, self.config.size, self.config.size)?;
        let (quantized, color_counts) =
            quantize_image(&self.quantizer, &resized, &mut self.histogram)?;
        write_png(&output, &quantized)?;

        tracing::info!(
            icon = %name,
            output = %output.display(),
            clean = color_counts[PALETTE_SIZE],
            "Converted icon"
        );

        Ok(IconResult {
            name: name.to_string(),
            output,
            color_counts,
        })
    }

    /// Convert every icon in `names`, continuing past failures
    pub fn convert_all<S: AsRef<str>>(&mut self, names: &[S]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for name in names {
            let name = name.as_ref();
            match self.convert_icon(name) {
                Ok(result) => summary.converted.push(result),
                Err(e) => {
                    tracing::warn!(icon = %name, error = %e, "Failed to convert icon");
                    summary.failed.push((name.to_string(), e.to_string()));
                }
            }
        }

        tracing::info!(
            converted = summary.converted.len(),
            failed = summary.failed.len(),
            distinct_colors = self.histogram.len(),
            "Batch finished"
        );
        summary
    }

    /// Convert the icons listed in the configuration
    pub fn convert_configured(&mut self) -> BatchSummary {
        let names = self.config.icons.clone();
        self.convert_all(&names)
    }

    /// Write the 7x1 palette swatch to `path`
    pub fn write_palette(&self, path: &Path) -> Result<(), ConvertError> {
        write_png(path, &palette_swatch())?;
        tracing::info!(path = %path.display(), "Wrote palette swatch");
        Ok(())
    }

    /// Colors seen more often than the configured report threshold
    pub fn report(&self) -> Vec<ColorCount> {
        self.histogram.report(self.config.report_threshold)
    }

    /// Every pixel seen so far in this run
    pub fn histogram(&self) -> &HistogramCollector {
        &self.histogram
    }

    /// Effective configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_swatch_order() {
        let swatch = palette_swatch();
        assert_eq!(swatch.width, 7);
        assert_eq!(swatch.height, 1);
        assert_eq!(swatch.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(swatch.pixel(1, 0), [255, 255, 255, 255]);
        assert_eq!(swatch.pixel(6, 0), [255, 140, 0, 255]);
    }

    #[test]
    fn test_quantize_image_maps_to_display_colors() {
        let image = RgbaImage::new(
            2,
            1,
            vec![250, 80, 46, 255, 10, 10, 10, 0],
        )
        .unwrap();
        let mut histogram = HistogramCollector::new();
        let (out, counts) = quantize_image(&Quantizer::new(), &image, &mut histogram).unwrap();

        assert_eq!(out.pixels, vec![255, 0, 0, 255, 255, 255, 255, 0]);
        assert_eq!(counts[InkColor::Red.index()], 1);
        assert_eq!(counts[InkColor::Clean.index()], 1);
        assert_eq!(histogram.total(), 2);
    }

    fn report_rows() -> Vec<ColorCount> {
        vec![
            ColorCount {
                color: Rgba8::opaque(0, 0, 0),
                count: 96,
            },
            ColorCount {
                color: Rgba8::opaque(255, 234, 49),
                count: 32,
            },
        ]
    }

    #[test]
    fn test_format_report_lines() {
        let text = format_report(&report_rows(), false).unwrap();
        assert_eq!(text, "0, 0, 0, 96\n255, 234, 49, 32\n");
        assert_eq!(format_report(&[], false).unwrap(), "");
    }

    #[test]
    fn test_format_report_json() {
        let text = format_report(&report_rows(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "color": "#000000", "rgb": [0, 0, 0], "count": 96 },
                { "color": "#FFEA31", "rgb": [255, 234, 49], "count": 32 },
            ])
        );
    }

    #[test]
    fn test_format_probe_pale_yellow() {
        let quantizer = Quantizer::new();
        let pale_yellow = Rgba8::opaque(224, 217, 181);
        assert_eq!(
            format_probe(&quantizer, pale_yellow, 0, 0),
            "(224, 217, 181): (255, 255, 255) false -> white"
        );
        assert_eq!(
            format_probe(&quantizer, pale_yellow, 1, 0),
            "(224, 217, 181): (255, 255, 0) false -> yellow"
        );
    }

    #[test]
    fn test_format_probe_greyscale_and_transparent() {
        let quantizer = Quantizer::new();
        assert_eq!(
            format_probe(&quantizer, Rgba8::opaque(40, 40, 40), 0, 0),
            "(40, 40, 40): (0, 0, 0) true -> black"
        );
        assert_eq!(
            format_probe(&quantizer, Rgba8::new(10, 200, 30, 0), 0, 0),
            "(10, 200, 30): (255, 255, 255) false -> clean"
        );
    }

    #[test]
    fn test_convert_missing_icon_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            source_dir: dir.path().join("images"),
            output_dir: dir.path().join("out"),
            ..Default::default()
        };
        let mut converter = IconConverter::new(config);

        let summary = converter.convert_all(&["missing.png"]);
        assert!(!summary.is_success());
        assert_eq!(summary.failed[0].0, "missing.png");
        assert!(converter.histogram().is_empty());
    }
}
