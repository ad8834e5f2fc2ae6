use anyhow::Context;
use crate::common::DrawingType;
use crate::data::label_dictionary::label_pairs;
use crate::utils;

/// Detector class id -> source label, one entry per line of a labels file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLabels {
    names: Vec<String>,
}

impl ClassLabels {
    /// The label order the house, tree and person detectors were trained with.
    pub fn for_drawing(drawing_type: DrawingType) -> Self {
        Self {
            names: label_pairs(drawing_type)
                .iter()
                .map(|(raw, _)| raw.to_string())
                .collect(),
        }
    }

    pub fn from_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|x| x.to_string()).collect(),
        }
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let names: Vec<String> = utils::file_to_vec(path.to_string())
            .with_context(|| format!("Failed to read labels file {}", path))?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        if names.is_empty() {
            anyhow::bail!("Labels file {} contains no labels", path);
        }
        Ok(Self { names })
    }

    pub fn name(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
