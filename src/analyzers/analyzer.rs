use crate::analyzers::DrawingProfile;
use crate::common::{AnalysisConfig, Canvas, DetectionSet, DrawingType, HtpDetection};
use crate::data::{InterpretationResult, ThresholdTable};

/// Rule engine for one drawing type.
#[derive(Debug, Clone)]
pub struct Analyzer {
    profile: DrawingProfile,
    canvas: Canvas,
}

impl Analyzer {
    pub fn new(profile: DrawingProfile, canvas: Canvas) -> Self {
        Self { profile, canvas }
    }

    pub fn house(canvas: Canvas) -> Self {
        Self::new(DrawingProfile::for_drawing(DrawingType::House), canvas)
    }

    pub fn tree(canvas: Canvas) -> Self {
        Self::new(DrawingProfile::for_drawing(DrawingType::Tree), canvas)
    }

    pub fn person(canvas: Canvas) -> Self {
        Self::new(DrawingProfile::for_drawing(DrawingType::Person), canvas)
    }

    pub fn drawing_type(&self) -> DrawingType {
        self.profile.drawing_type
    }

    pub fn profile(&self) -> &DrawingProfile {
        &self.profile
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Same input in the same order always gives the same lines.
    pub fn analyze(&self, detections: &[HtpDetection]) -> InterpretationResult {
        let result = self.profile.run(detections, &self.canvas);
        log::debug!("{} analysis: {} detection(s) -> {} line(s)",
                    self.drawing_type(), detections.len(), result.len());
        result
    }
}

/// The house, tree and person analyzers behind one entry point.
#[derive(Debug, Clone)]
pub struct HtpAnalyzer {
    house: Analyzer,
    tree: Analyzer,
    person: Analyzer,
}

impl HtpAnalyzer {
    pub fn new(config: &AnalysisConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let build = |drawing_type: DrawingType| -> anyhow::Result<Analyzer> {
            let mut thresholds = ThresholdTable::for_drawing(drawing_type);
            if let Some(dir) = &config.thresholds_dir {
                thresholds = thresholds.with_overrides_from(dir)?;
            }
            let profile = DrawingProfile::for_drawing(drawing_type).with_thresholds(thresholds);
            Ok(Analyzer::new(profile, config.canvas))
        };
        Ok(Self {
            house: build(DrawingType::House)?,
            tree: build(DrawingType::Tree)?,
            person: build(DrawingType::Person)?,
        })
    }

    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        match analyzer.drawing_type() {
            DrawingType::House => self.house = analyzer,
            DrawingType::Tree => self.tree = analyzer,
            DrawingType::Person => self.person = analyzer,
        }
        self
    }

    pub fn analyzer(&self, drawing_type: DrawingType) -> &Analyzer {
        match drawing_type {
            DrawingType::House => &self.house,
            DrawingType::Tree => &self.tree,
            DrawingType::Person => &self.person,
        }
    }

    pub fn analyze(&self, set: &DetectionSet) -> InterpretationResult {
        self.analyzer(set.drawing_type).analyze(&set.detections)
    }
}

impl Default for HtpAnalyzer {
    fn default() -> Self {
        let canvas = Canvas::default();
        Self {
            house: Analyzer::house(canvas),
            tree: Analyzer::tree(canvas),
            person: Analyzer::person(canvas),
        }
    }
}
