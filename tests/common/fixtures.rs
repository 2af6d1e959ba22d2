//! Test fixtures: a throwaway source/output tree and icon generators.

use std::path::{Path, PathBuf};

use inky_icons::models::AppConfig;
use inky_icons::rendering::{write_png, RgbaImage};
use tempfile::TempDir;

/// Source colors used by the fixture icons
pub mod colors {
    /// Curated yellow source color
    pub const SUN_YELLOW: [u8; 4] = [255, 234, 49, 255];
    /// Curated pale yellow, dithered with White
    pub const PALE_YELLOW: [u8; 4] = [224, 217, 181, 255];
    /// Curated rain blue
    pub const RAIN_BLUE: [u8; 4] = [34, 160, 239, 255];
    /// Fully transparent background
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
    /// Uncurated dark grey
    pub const DARK_GREY: [u8; 4] = [40, 40, 40, 255];
}

/// Temporary source and output directories with a matching config.
pub struct TestWorkspace {
    dir: TempDir,
    pub config: AppConfig,
}

impl TestWorkspace {
    /// Workspace producing `size`x`size` icons
    pub fn new(size: u32) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = AppConfig {
            source_dir: dir.path().join("images"),
            output_dir: dir.path().join("out"),
            size,
            icons: Vec::new(),
            ..Default::default()
        };
        std::fs::create_dir_all(&config.source_dir).expect("create source dir");
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn source_path(&self, name: &str) -> PathBuf {
        self.config.source_dir.join(name)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(name)
    }

    /// Write a solid-color icon into the source directory
    pub fn add_solid_icon(&mut self, name: &str, size: u32, color: [u8; 4]) {
        self.add_icon(name, &solid_image(size, size, color));
    }

    /// Write an icon and append it to the configured icon list
    pub fn add_icon(&mut self, name: &str, image: &RgbaImage) {
        write_png(&self.source_path(name), image).expect("write fixture icon");
        self.config.icons.push(name.to_string());
    }

    /// Write raw bytes as an icon (for decode failures)
    pub fn add_raw_icon(&mut self, name: &str, bytes: &[u8]) {
        std::fs::write(self.source_path(name), bytes).expect("write raw icon");
        self.config.icons.push(name.to_string());
    }
}

/// Image filled with one color
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    let pixels = color
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    RgbaImage {
        width,
        height,
        pixels,
    }
}

/// A sun on a transparent background: an opaque yellow square in the
/// middle, transparent border of `border` pixels.
pub fn sun_icon(size: u32, border: u32) -> RgbaImage {
    let mut image = solid_image(size, size, colors::TRANSPARENT);
    for y in border..size - border {
        for x in border..size - border {
            let offset = ((y * size + x) * 4) as usize;
            image.pixels[offset..offset + 4].copy_from_slice(&colors::SUN_YELLOW);
        }
    }
    image
}
