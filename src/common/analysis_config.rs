use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::data::FsAccess;

pub const DEFAULT_CANVAS_SIZE: f64 = 1280.;

/// Resolution the detectors were calibrated against. Position bands are thirds of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parses an `img_resolution` value such as `"1280x1280"` (also accepts `X` and `*`).
    pub fn from_resolution(resolution: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = resolution
            .split(|c| c == 'x' || c == 'X' || c == '*')
            .map(str::trim)
            .collect();
        if parts.len() != 2 {
            anyhow::bail!("Malformed image resolution '{}', expected WIDTHxHEIGHT", resolution);
        }
        let width: f64 = parts[0].parse()?;
        let height: f64 = parts[1].parse()?;
        let canvas = Self::new(width, height);
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.width > 0. && self.height > 0.) {
            anyhow::bail!("Canvas must have a positive size, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

#[derive(Default, Debug, Clone)]
pub struct AnalysisConfig {
    pub canvas: Canvas,
    pub thresholds_dir: Option<PathBuf>,
    pub min_confidence: f64,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas::new(width, height);
        self
    }

    pub fn with_thresholds_dir(mut self, dir: PathBuf) -> Self {
        self.thresholds_dir = Some(dir);
        self
    }

    /// Looks for threshold overrides under the user config directory (`~/.config/htp/thresholds`).
    pub fn with_user_thresholds(mut self) -> anyhow::Result<Self> {
        self.thresholds_dir = Some(FsAccess::thresholds_dir()?);
        Ok(self)
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.canvas.validate()?;
        if !(0. ..=1.).contains(&self.min_confidence) {
            anyhow::bail!("Minimum confidence must be within [0, 1], got {}", self.min_confidence);
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!("Canvas Resolution: {}x{}\n\
        Threshold Overrides: {}\n\
        Minimum Detection Confidence: {}",
                self.canvas.width, self.canvas.height,
                self.thresholds_dir.as_ref().map(|d| d.display().to_string()).unwrap_or("none".to_string()),
                self.min_confidence)
    }
}
