use std::path::Path;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use crate::common::{Canvas, DetectionSet, DrawingType, HtpDetection};
use crate::data::FsAccess;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default)]
    pub img_resolution: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordAnnotations {
    #[serde(default)]
    pub bbox: Vec<HtpDetection>,
}

/// A stored annotation file for one drawing:
/// `{"meta": {"img_resolution": "1280x1280"}, "annotations": {"bbox": [...]}}`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingRecord {
    #[serde(default)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub annotations: RecordAnnotations,
}

impl DrawingRecord {
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drawing record {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse drawing record {}", path.display()))
    }

    /// Loads `file_name` from the saved records directory, `~/.htp/records`.
    pub fn load_saved(file_name: &str) -> anyhow::Result<Self> {
        Self::from_file(&FsAccess::records_dir()?.join(file_name))
    }

    /// Canvas declared by the record, if it carries a resolution.
    pub fn canvas(&self) -> anyhow::Result<Option<Canvas>> {
        match &self.meta.img_resolution {
            Some(resolution) => Ok(Some(Canvas::from_resolution(resolution)?)),
            None => Ok(None),
        }
    }

    pub fn into_detection_set(self, drawing_type: DrawingType) -> DetectionSet {
        DetectionSet::new(drawing_type, self.annotations.bbox)
    }
}
