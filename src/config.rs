//! JSON configuration for the demo executables.

use crate::detect::DetectParams;
use crate::overlay::{OverlayParams, OverlayStyle};
use crate::types::Rect;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub roi: Option<Rect>,
    #[serde(default)]
    pub detect: DetectConfig,
    #[serde(default)]
    pub style: Option<OverlayStyle>,
    pub output: OutputConfig,
}

/// Optional detection overrides; unset fields keep the defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DetectConfig {
    pub blur: Option<bool>,
    pub low_threshold: Option<f32>,
    pub high_threshold: Option<f32>,
    pub vote_threshold: Option<u32>,
}

impl DetectConfig {
    pub fn resolve(&self) -> DetectParams {
        let defaults = DetectParams::default();
        DetectParams {
            blur: self.blur.unwrap_or(defaults.blur),
            low_threshold: self.low_threshold.unwrap_or(defaults.low_threshold),
            high_threshold: self.high_threshold.unwrap_or(defaults.high_threshold),
            vote_threshold: self.vote_threshold.unwrap_or(defaults.vote_threshold),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub annotated_image: PathBuf,
    pub report_json: PathBuf,
}

impl DemoConfig {
    /// Assemble pipeline parameters from the config, falling back to the
    /// crate defaults where the file is silent.
    pub fn overlay_params(&self) -> OverlayParams {
        let defaults = OverlayParams::default();
        OverlayParams {
            roi: self.roi.unwrap_or(defaults.roi),
            detect: self.detect.resolve(),
            style: self.style.clone().unwrap_or(defaults.style),
        }
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
