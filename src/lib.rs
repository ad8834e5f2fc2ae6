mod utils;
pub mod analysis_runners;
pub mod analyzers;
pub mod common;
pub mod data;
pub mod detection_processing;
pub mod detectors;
pub mod report;

use std::time::Instant;
use crate::analyzers::HtpAnalyzer;
use crate::common::{AnalysisConfig, DetectionSet};
use crate::data::InterpretationResult;
use crate::detectors::{detect_drawing, DrawingDetector};

pub fn init_analyzer(config: &AnalysisConfig) -> anyhow::Result<HtpAnalyzer> {
    log::info!("Initializing HTP analyzers\n{}", config.summary());
    HtpAnalyzer::new(config)
}

pub fn run_analysis(analyzer: &HtpAnalyzer, set: &DetectionSet) -> InterpretationResult {
    let now = Instant::now();

    let result = analyzer.analyze(set);

    log::trace!("{} analysis time: {:?}", set.drawing_type, now.elapsed());

    result
}

/// Runs `detector` on the image and analyzes what it finds.
pub fn detect_and_analyze<D: DrawingDetector + ?Sized>(detector: &D, analyzer: &HtpAnalyzer, image_path: &str,
                                                       config: &AnalysisConfig) -> anyhow::Result<InterpretationResult> {
    let set = detect_drawing(detector, image_path, config)?;
    Ok(run_analysis(analyzer, &set))
}
