use serde::Deserialize;
use std::path::{Path, PathBuf};

use inky_quant::{DEFAULT_REMAP_THRESHOLD, DEFAULT_REPORT_THRESHOLD, DEFAULT_TRANSPARENCY_ALPHA};

/// Config file looked up in the working directory when `CONFIG_FILE` is unset
pub const DEFAULT_CONFIG_FILE: &str = "inky-icons.yaml";

/// Application configuration loaded from inky-icons.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the source icons
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory the quantized icons are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Edge length of the square output icons
    #[serde(default = "default_size")]
    pub size: u32,

    /// Icon file names, relative to `source_dir`
    #[serde(default = "default_icons")]
    pub icons: Vec<String>,

    /// Histogram report lists colors seen more often than this
    #[serde(default = "default_report_threshold")]
    pub report_threshold: u64,

    /// Match radius for curated source colors
    #[serde(default = "default_remap_threshold")]
    pub remap_threshold: f32,

    /// Pixels with alpha below this become transparent
    #[serde(default = "default_transparency_alpha")]
    pub transparency_alpha: u8,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("./images")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./out")
}

fn default_size() -> u32 {
    112
}

/// `00.png` through `47.png`, then `na.png`
fn default_icons() -> Vec<String> {
    (0..48)
        .map(|i| format!("{:02}.png", i))
        .chain(std::iter::once("na.png".to_string()))
        .collect()
}

fn default_report_threshold() -> u64 {
    DEFAULT_REPORT_THRESHOLD
}

fn default_remap_threshold() -> f32 {
    DEFAULT_REMAP_THRESHOLD
}

fn default_transparency_alpha() -> u8 {
    DEFAULT_TRANSPARENCY_ALPHA
}

impl AppConfig {
    /// Load configuration from `path`, or from `CONFIG_FILE` /
    /// `./inky-icons.yaml` when no path is given.
    ///
    /// A missing default file silently yields the defaults; unreadable or
    /// invalid files log a warning and also fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let env = std::env::var("CONFIG_FILE").ok();
        match resolve_path(path, env, Path::new(DEFAULT_CONFIG_FILE)) {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Self::default()
            }
        }
    }

    fn load_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        icons = config.icons.len(),
                        size = config.size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        %e,
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    %e,
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Build the quantizer described by this configuration
    pub fn quantizer(&self) -> inky_quant::Quantizer {
        inky_quant::Quantizer::new()
            .remap_threshold(self.remap_threshold)
            .transparency_alpha(self.transparency_alpha)
    }
}

/// Pick the config file: the explicit path, then `CONFIG_FILE`, then
/// `fallback` if it exists. `None` means run on defaults.
fn resolve_path(explicit: Option<&Path>, env: Option<String>, fallback: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    fallback.exists().then(|| fallback.to_path_buf())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            size: default_size(),
            icons: default_icons(),
            report_threshold: default_report_threshold(),
            remap_threshold: default_remap_threshold(),
            transparency_alpha: default_transparency_alpha(),
        }
    }
}
