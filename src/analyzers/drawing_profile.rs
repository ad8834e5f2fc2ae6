use std::path::Path;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use crate::analyzers::predicates::Scope;
use crate::analyzers::{house, person, tree, FeatureRule};
use crate::common::{Canvas, DrawingType, HtpDetection};
use crate::data::{InterpretationResult, LabelDictionary, ThresholdTable};

/// Everything an analyzer needs for one drawing type: label keys, thresholds and the ordered rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingProfile {
    pub drawing_type: DrawingType,
    pub dictionary: LabelDictionary,
    pub thresholds: ThresholdTable,
    pub rules: Vec<FeatureRule>,
}

impl DrawingProfile {
    pub fn for_drawing(drawing_type: DrawingType) -> Self {
        let rules = match drawing_type {
            DrawingType::House => house::rules(),
            DrawingType::Tree => tree::rules(),
            DrawingType::Person => person::rules(),
        };
        Self {
            drawing_type,
            dictionary: LabelDictionary::for_drawing(drawing_type),
            thresholds: ThresholdTable::for_drawing(drawing_type),
            rules,
        }
    }

    pub fn with_thresholds(mut self, thresholds: ThresholdTable) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drawing profile {}", path.display()))?;
        let profile = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse drawing profile {}", path.display()))?;
        Ok(profile)
    }

    /// Runs the rules in order. A rule that halts the scope ends the analysis after its own lines.
    pub fn run(&self, detections: &[HtpDetection], canvas: &Canvas) -> InterpretationResult {
        let mut scope = Scope::new(detections, &self.dictionary, &self.thresholds, canvas);
        let mut result = InterpretationResult::new(self.drawing_type);
        for rule in &self.rules {
            result.extend(rule.evaluate(&mut scope));
            if scope.is_halted() {
                break;
            }
        }
        result
    }
}
