use std::time::Instant;
use crate::common::{AnalysisConfig, DetectionSet, DrawingType};
use crate::data::ClassLabels;
use crate::detection_processing::{process_predictions, RawRow};
use crate::utils;

/// An object detector trained on one drawing type.
/// Given an image, it returns `[x1, y1, x2, y2, confidence, class_id]` rows.
pub trait DrawingDetector {
    fn drawing_type(&self) -> DrawingType;

    fn detect(&self, image_path: &str) -> anyhow::Result<Vec<RawRow>>;

    /// Class id order of the model. Defaults to the order the HTP detectors were trained with.
    fn class_labels(&self) -> ClassLabels {
        ClassLabels::for_drawing(self.drawing_type())
    }
}

pub fn detect_drawing<D: DrawingDetector + ?Sized>(detector: &D, image_path: &str,
                                                   config: &AnalysisConfig) -> anyhow::Result<DetectionSet> {
    let detect_time = Instant::now();
    let mut elapsed = detect_time.elapsed();

    let rows = detector.detect(image_path)?;
    elapsed = utils::trace("TIME", "Detection run", detect_time, elapsed);

    let detections = process_predictions(&rows, &detector.class_labels(), config.min_confidence);
    utils::trace("TIME", "Postprocessing", detect_time, elapsed);

    log::info!("{} detector found {} object(s) in {}", detector.drawing_type(), detections.len(), image_path);
    Ok(DetectionSet::new(detector.drawing_type(), detections))
}
