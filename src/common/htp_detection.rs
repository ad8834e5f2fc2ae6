use serde::{Deserialize, Serialize};
use crate::common::{DrawingType, HtpBox};

/// One labeled element detected in a drawing.
///
/// Serialized flat, matching the stored annotation records:
/// `{"label": "지붕", "x": 10, "y": 20, "w": 300, "h": 120, "confidence": 0.91}`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtpDetection {
    pub label: String,
    #[serde(flatten)]
    pub bbox: HtpBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl HtpDetection {
    pub fn new(label: &str, bbox: HtpBox) -> Self {
        Self {
            label: label.to_string(),
            bbox,
            confidence: None,
        }
    }

    /// Sets the bounding box's coordinates and dimensions using `(x, y, w, h)`.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the top-left corner.
    /// * `y` - The y-coordinate of the top-left corner.
    /// * `w` - The width of the bounding box.
    /// * `h` - The height of the bounding box.
    ///
    /// # Returns
    ///
    /// A `HtpDetection` instance with updated coordinates and dimensions.
    pub fn with_xy_wh(mut self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.bbox = HtpBox::new(x, y, w, h);
        self
    }

    /// Sets the bounding box's coordinates using `(x1, y1, x2, y2)` and calculates width and height.
    pub fn with_x1y1_x2y2(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.bbox = HtpBox::from_x1y1_x2y2(x1, y1, x2, y2);
        self
    }

    pub fn with_confidence(mut self, conf: f64) -> Self {
        self.confidence = Some(conf);
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn area(&self) -> f64 {
        self.bbox.area()
    }
}

/// Detections of a single drawing, in detector output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSet {
    pub drawing_type: DrawingType,
    pub detections: Vec<HtpDetection>,
}

impl DetectionSet {
    pub fn new(drawing_type: DrawingType, detections: Vec<HtpDetection>) -> Self {
        Self {
            drawing_type,
            detections,
        }
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HtpDetection> {
        self.detections.iter()
    }
}
