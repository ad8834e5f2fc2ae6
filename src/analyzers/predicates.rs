//! The geometric checks every drawing profile is assembled from.
//!
//! Each check reads the detections through a [`Scope`] and returns plain values;
//! turning them into output lines is left to [`FeatureRule`](crate::analyzers::FeatureRule).
use serde::{Deserialize, Serialize};
use crate::common::{ratio, BandAxis, Canvas, HtpDetection};
use crate::data::{LabelDictionary, RatioThreshold, ThresholdTable};

/// Read-only view of one drawing's detections plus the running state of an analysis.
pub struct Scope<'a> {
    detections: &'a [HtpDetection],
    dictionary: &'a LabelDictionary,
    thresholds: &'a ThresholdTable,
    canvas: &'a Canvas,
    reference_area: Option<f64>,
    halted: bool,
}

impl<'a> Scope<'a> {
    pub fn new(detections: &'a [HtpDetection], dictionary: &'a LabelDictionary,
               thresholds: &'a ThresholdTable, canvas: &'a Canvas) -> Self {
        Self {
            detections,
            dictionary,
            thresholds,
            canvas,
            reference_area: None,
            halted: false,
        }
    }

    pub fn key_of(&self, detection: &'a HtpDetection) -> &'a str {
        self.dictionary.to_canonical(&detection.label)
    }

    /// Detections whose canonical key is `key`, in detection order.
    pub fn matching(&self, key: &str) -> Vec<&'a HtpDetection> {
        let detections = self.detections;
        detections
            .iter()
            .filter(|det| self.key_of(*det) == key)
            .collect()
    }

    pub fn first(&self, key: &str) -> Option<&'a HtpDetection> {
        let detections = self.detections;
        detections.iter().find(|det| self.key_of(*det) == key)
    }

    pub fn count(&self, key: &str) -> usize {
        let detections = self.detections;
        detections.iter().filter(|det| self.key_of(*det) == key).count()
    }

    pub fn areas(&self, key: &str) -> Vec<f64> {
        self.matching(key).iter().map(|det| det.area()).collect()
    }

    pub fn detections(&self) -> &'a [HtpDetection] {
        self.detections
    }

    pub fn canvas(&self) -> &'a Canvas {
        self.canvas
    }

    pub fn threshold(&self, feature: &str) -> Option<&'a RatioThreshold> {
        self.thresholds.get(feature)
    }

    pub fn reference_area(&self) -> Option<f64> {
        self.reference_area
    }

    /// Records the denominator for later area ratios. A zero area counts as missing.
    pub fn set_reference_area(&mut self, area: Option<f64>) {
        self.reference_area = area.filter(|a| *a > 0.);
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Counts boxes with `key` and reports it.
///
/// # Returns
///
/// * `(String, usize)` - `There are N '<key>' objects.` or `No '<key>' found.`, and the count.
pub fn existence(scope: &Scope<'_>, key: &str) -> (String, usize) {
    let cnt = scope.count(key);
    let msg = if cnt > 0 {
        format!("There are {} '{}' objects.", cnt, key)
    } else {
        format!("No '{}' found.", key)
    };
    (msg, cnt)
}

/// Band index (0, 1, 2) of the first box with `whole`, or `None` when the drawing has none.
pub fn position_band(scope: &Scope<'_>, whole: &str, axis: BandAxis) -> Option<usize> {
    let whole_box = scope.first(whole)?;
    let index = match axis {
        BandAxis::Vertical => whole_box.bbox.vertical_band(scope.canvas()).index(),
        BandAxis::Horizontal => whole_box.bbox.horizontal_band(scope.canvas()).index(),
    };
    Some(index)
}

/// First-match-wins ratio check.
///
/// Walks `areas` in order and returns the text of the first area whose ratio to
/// `reference_area` is large or small. Areas in between are skipped silently.
/// A reference that is not strictly positive yields nothing.
pub fn area_ratio<'t>(reference_area: f64, areas: &[f64], threshold: &'t RatioThreshold) -> Option<&'t str> {
    areas
        .iter()
        .filter_map(|area| ratio(*area, reference_area))
        .find_map(|r| threshold.classify(r))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Area,
    Height,
}

impl Measure {
    pub fn of(&self, detection: &HtpDetection) -> f64 {
        match self {
            Measure::Area => detection.area(),
            Measure::Height => detection.bbox.height(),
        }
    }
}

/// Mean of `samples` numerator boxes over one denominator box, gathered in a single pass.
///
/// The scan stops as soon as exactly `samples` numerators and a denominator have been
/// seen. Until then a later denominator box replaces the earlier one, and so does a
/// later numerator when `samples` is 1; with more samples numerators accumulate.
/// Yields `None` unless exactly `samples` numerators were gathered, when there is no
/// denominator, or when the denominator measures zero.
pub fn mean_ratio(scope: &Scope<'_>, numerator: &str, samples: usize,
                  denominator: &str, measure: Measure) -> Option<f64> {
    if samples == 0 {
        return None;
    }
    let mut numerators: Vec<f64> = Vec::with_capacity(samples);
    let mut denominator_value: Option<f64> = None;

    for det in scope.detections() {
        let key = scope.key_of(det);
        if key == numerator {
            if samples == 1 {
                numerators.clear();
            }
            numerators.push(measure.of(det));
        } else if key == denominator {
            denominator_value = Some(measure.of(det));
        }

        if numerators.len() == samples && denominator_value.is_some() {
            break;
        }
    }

    if numerators.len() != samples {
        return None;
    }
    let mean = numerators.iter().sum::<f64>() / samples as f64;
    ratio(mean, denominator_value?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    ContainerMissing,
    Outside,
}

/// Whether the center of any `targets` box lies inside the first `container` box, edges included.
pub fn containment(scope: &Scope<'_>, container: &str, targets: &[String]) -> Containment {
    let container_box = match scope.first(container) {
        Some(det) => det.bbox,
        None => return Containment::ContainerMissing,
    };
    let inside = scope
        .detections()
        .iter()
        .filter(|det| targets.iter().any(|t| t == scope.key_of(*det)))
        .any(|det| container_box.contains_center_of(&det.bbox));
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// `"<key>: [x,y,w,h]"` for every detection, joined by `", "`.
pub fn box_dump(scope: &Scope<'_>) -> String {
    scope
        .detections()
        .iter()
        .map(|det| format!("{}: {}", scope.key_of(det), det.bbox.dump()))
        .collect::<Vec<String>>()
        .join(", ")
}
