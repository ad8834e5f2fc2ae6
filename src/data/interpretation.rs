use serde::{Deserialize, Serialize};
use crate::common::DrawingType;

/// Ordered interpretation lines produced for one drawing.
///
/// Line order is the order the findings reach the narrative prompt.
///
/// # Fields
///
/// * `drawing_type` - Which analyzer produced the lines.
/// * `lines` - One interpretation sentence per entry; the first entry is the box dump.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterpretationResult {
    pub drawing_type: DrawingType,
    lines: Vec<String>,
}

impl std::fmt::Debug for InterpretationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut f = f.debug_struct("InterpretationResult");
        f.field("DrawingType", &self.drawing_type);
        if !self.lines.is_empty() {
            f.field("Lines", &self.lines);
        }
        f.finish()
    }
}

impl InterpretationResult {
    pub fn new(drawing_type: DrawingType) -> Self {
        Self {
            drawing_type,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One interpretation per line, stable order.
    pub fn to_feature_block(&self) -> String {
        self.lines.join("\n")
    }
}
