use std::time::Instant;
use crate::common::{DetectionSet, DrawingType, HtpDetection};
use crate::data::ClassLabels;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// One detector output row: `[x1, y1, x2, y2, confidence, class_id]`.
pub type RawRow = [f64; 6];

/// Converts raw detector rows into labeled `(x, y, w, h)` detections, keeping detector order.
///
/// Rows below `min_confidence` are dropped. Class ids outside `class_labels` keep
/// the `Unknown` label so the row still shows up in the box dump.
pub fn process_predictions(rows: &[RawRow], class_labels: &ClassLabels, min_confidence: f64) -> Vec<HtpDetection> {
    let now = Instant::now();

    let detections: Vec<HtpDetection> = rows
        .iter()
        .filter(|row| row[4] >= min_confidence)
        .map(|row| {
            let [x1, y1, x2, y2, conf, class_id] = *row;
            let label = class_name(class_labels, class_id);
            HtpDetection::default()
                .with_label(label)
                .with_x1y1_x2y2(x1, y1, x2, y2)
                .with_confidence(conf)
        })
        .collect();

    log::trace!("Processed {} of {} rows in {:.2?}", detections.len(), rows.len(), now.elapsed());
    detections
}

fn class_name(class_labels: &ClassLabels, class_id: f64) -> &str {
    let name = if class_id.is_finite() && class_id >= 0. {
        class_labels.name(class_id as usize)
    } else {
        None
    };
    name.unwrap_or_else(|| {
        log::warn!("Unknown class id {} ({} labels loaded)", class_id, class_labels.len());
        UNKNOWN_LABEL
    })
}

pub fn detection_set_from_rows(drawing_type: DrawingType, rows: &[RawRow], min_confidence: f64) -> DetectionSet {
    let class_labels = ClassLabels::for_drawing(drawing_type);
    DetectionSet::new(drawing_type, process_predictions(rows, &class_labels, min_confidence))
}
