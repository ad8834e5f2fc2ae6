use std::path::Path;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use crate::common::DrawingType;

/// How a ratio is compared against the two cut-offs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// `ratio >= large`, then `ratio <= small`.
    #[default] Inclusive,
    /// `ratio > large`, then `ratio < small`.
    Strict,
}

/// Percentile cut-offs for one compared feature and the sentence each side emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioThreshold {
    pub feature: String,
    pub large_threshold: f64,
    pub small_threshold: f64,
    pub large_text: String,
    pub small_text: String,
    #[serde(default)]
    pub comparison: Comparison,
}

impl RatioThreshold {
    pub fn new(feature: &str, large_threshold: f64, small_threshold: f64,
               large_text: &str, small_text: &str) -> Self {
        Self {
            feature: feature.to_string(),
            large_threshold,
            small_threshold,
            large_text: large_text.to_string(),
            small_text: small_text.to_string(),
            comparison: Comparison::Inclusive,
        }
    }

    pub fn strict(mut self) -> Self {
        self.comparison = Comparison::Strict;
        self
    }

    pub fn is_large(&self, ratio: f64) -> bool {
        match self.comparison {
            Comparison::Inclusive => ratio >= self.large_threshold,
            Comparison::Strict => ratio > self.large_threshold,
        }
    }

    pub fn is_small(&self, ratio: f64) -> bool {
        match self.comparison {
            Comparison::Inclusive => ratio <= self.small_threshold,
            Comparison::Strict => ratio < self.small_threshold,
        }
    }

    /// The large check runs first, so overlapping cut-offs resolve to "large".
    pub fn classify(&self, ratio: f64) -> Option<&str> {
        if self.is_large(ratio) {
            Some(self.large_text.as_str())
        } else if self.is_small(ratio) {
            Some(self.small_text.as_str())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub drawing_type: DrawingType,
    pub entries: Vec<RatioThreshold>,
}

impl ThresholdTable {
    pub fn for_drawing(drawing_type: DrawingType) -> Self {
        match drawing_type {
            DrawingType::House => Self::house(),
            DrawingType::Tree => Self::tree(),
            DrawingType::Person => Self::person(),
        }
    }

    /// Ratios against the wall area.
    pub fn house() -> Self {
        Self {
            drawing_type: DrawingType::House,
            entries: vec![
                RatioThreshold::new(
                    "roof", 0.923515, 0.665191,
                    "Large roof: a tendency to daydream and flee to superficial interpersonal relationships",
                    "Small roof: a lack of psychological protection, realistic thinking",
                ),
                RatioThreshold::new(
                    "window", 0.073576, 0.041115,
                    "Large window: inflated self-esteem, grandiose self",
                    "Small window: a psychological distancing, shy personality",
                ),
                RatioThreshold::new(
                    "door", 0.159336, 0.102952,
                    "Large door: a dependent person, a desire for active social contact",
                    "Small door: reluctance, helplessness and indecision to come into contact with the environment",
                ),
                RatioThreshold::new(
                    "smoke", 0.187033, 0.069497,
                    "Large smoke: a lack of home warmth",
                    "Small smoke: suppression of emotional expression",
                ),
            ],
        }
    }

    /// Ratios against the crown area. The branch cut-offs overlap, so every branch ratio classifies.
    pub fn tree() -> Self {
        Self {
            drawing_type: DrawingType::Tree,
            entries: vec![
                RatioThreshold::new(
                    "trunk", 0.650350, 0.381995,
                    "Large trunk: actively engaged, creative environment",
                    "Small trunk: helplessness, maladaptation",
                ),
                RatioThreshold::new(
                    "branch", 0.145762, 0.359546,
                    "Large branch: inflated self-esteem, grandiose self",
                    "Small branch: weakness and incompetence",
                ),
            ],
        }
    }

    pub fn person() -> Self {
        Self {
            drawing_type: DrawingType::Person,
            entries: vec![
                RatioThreshold::new(
                    "head", 2.2925420, 1.2819802,
                    "Large head: Intellectual curiosity, lack of physical energy.",
                    "No head: Neurosis, depression, autistic tendencies.",
                ).strict(),
                RatioThreshold::new(
                    "eye", 0.0427861542, 0.0221859051,
                    "Large eyes: Suspicion of others, hypersensitivity.",
                    "No eyes: Guilt feelings.",
                ).strict(),
                RatioThreshold::new(
                    "leg", 1.30162008, 0.9464469,
                    "Long legs: Desire for stability and independence.",
                    "Short legs: Loss of independence, tendency for dependency.",
                ).strict(),
            ],
        }
    }

    pub fn get(&self, feature: &str) -> Option<&RatioThreshold> {
        self.entries.iter().find(|entry| entry.feature == feature)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read threshold table {}", path.display()))?;
        let table: ThresholdTable = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse threshold table {}", path.display()))?;
        Ok(table)
    }

    /// Replaces entries whose feature appears in `other` and appends the rest.
    pub fn merge(mut self, other: ThresholdTable) -> Self {
        for entry in other.entries {
            match self.entries.iter_mut().find(|e| e.feature == entry.feature) {
                Some(existing) => *existing = entry,
                None => self.entries.push(entry),
            }
        }
        self
    }

    /// Loads `<dir>/<drawing type>.json` over the built-in table when that file exists.
    pub fn with_overrides_from(self, dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(format!("{}.json", self.drawing_type.str_lowercase()));
        if !path.exists() {
            return Ok(self);
        }
        let overrides = Self::from_json_file(&path)?;
        if overrides.drawing_type != self.drawing_type {
            anyhow::bail!(
                "Threshold file {} is for {}, expected {}",
                path.display(), overrides.drawing_type, self.drawing_type
            );
        }
        log::info!("Loaded {} threshold override(s) from {}", overrides.entries.len(), path.display());
        Ok(self.merge(overrides))
    }
}
