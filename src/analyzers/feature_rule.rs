use serde::{Deserialize, Serialize};
use crate::analyzers::predicates::{self, Containment, Measure, Scope};
use crate::common::BandAxis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRule {
    pub whole: String,
    pub axis: BandAxis,
    /// Top/middle/bottom or left/center/right.
    pub texts: [String; 3],
    pub missing_text: String,
}

/// Existence check on the element every later area ratio is divided by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRule {
    pub label: String,
    /// Stop the analysis when the reference area is missing or zero.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanRatioRule {
    pub feature: String,
    pub numerator: String,
    pub samples: usize,
    pub denominator: String,
    pub measure: Measure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainmentRule {
    pub container: String,
    pub targets: Vec<String>,
    pub inside_text: String,
    pub missing_text: String,
    pub outside_text: String,
}

/// One step of a drawing profile. Each step contributes zero or more lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureRule {
    BoxDump,
    Position(PositionRule),
    Reference(ReferenceRule),
    AreaRatio { label: String },
    Presence { label: String, text: String },
    Silent { label: String },
    MeanRatio(MeanRatioRule),
    Containment(ContainmentRule),
}

impl FeatureRule {
    pub fn position(whole: &str, axis: BandAxis, texts: [&str; 3], missing_text: &str) -> Self {
        FeatureRule::Position(PositionRule {
            whole: whole.to_string(),
            axis,
            texts: texts.map(str::to_string),
            missing_text: missing_text.to_string(),
        })
    }

    pub fn reference(label: &str, required: bool) -> Self {
        FeatureRule::Reference(ReferenceRule {
            label: label.to_string(),
            required,
        })
    }

    pub fn area_ratio(label: &str) -> Self {
        FeatureRule::AreaRatio { label: label.to_string() }
    }

    pub fn presence(label: &str, text: &str) -> Self {
        FeatureRule::Presence {
            label: label.to_string(),
            text: text.to_string(),
        }
    }

    pub fn silent(label: &str) -> Self {
        FeatureRule::Silent { label: label.to_string() }
    }

    pub fn mean_ratio(feature: &str, numerator: &str, samples: usize, denominator: &str, measure: Measure) -> Self {
        FeatureRule::MeanRatio(MeanRatioRule {
            feature: feature.to_string(),
            numerator: numerator.to_string(),
            samples,
            denominator: denominator.to_string(),
            measure,
        })
    }

    pub fn containment(container: &str, targets: &[&str], inside_text: &str,
                       missing_text: &str, outside_text: &str) -> Self {
        FeatureRule::Containment(ContainmentRule {
            container: container.to_string(),
            targets: targets.iter().map(|x| x.to_string()).collect(),
            inside_text: inside_text.to_string(),
            missing_text: missing_text.to_string(),
            outside_text: outside_text.to_string(),
        })
    }

    pub fn evaluate(&self, scope: &mut Scope<'_>) -> Vec<String> {
        match self {
            FeatureRule::BoxDump => vec![predicates::box_dump(scope)],
            FeatureRule::Position(rule) => {
                let line = match predicates::position_band(scope, &rule.whole, rule.axis) {
                    Some(band) => rule.texts[band].clone(),
                    None => rule.missing_text.clone(),
                };
                vec![line]
            }
            FeatureRule::Reference(rule) => {
                let (msg, cnt) = predicates::existence(scope, &rule.label);
                let area = if cnt > 0 {
                    scope.first(&rule.label).map(|det| det.area())
                } else {
                    None
                };
                scope.set_reference_area(area);
                if rule.required && scope.reference_area().is_none() {
                    scope.halt();
                }
                vec![msg]
            }
            FeatureRule::AreaRatio { label } => {
                let (msg, cnt) = predicates::existence(scope, label);
                let mut lines = vec![msg];
                if cnt == 0 {
                    return lines;
                }
                let reference_area = match scope.reference_area() {
                    Some(area) => area,
                    None => return lines,
                };
                match scope.threshold(label) {
                    Some(threshold) => {
                        let areas = scope.areas(label);
                        if let Some(text) = predicates::area_ratio(reference_area, &areas, threshold) {
                            lines.push(text.to_string());
                        }
                    }
                    None => log::debug!("No ratio threshold for '{}', skipping", label),
                }
                lines
            }
            FeatureRule::Presence { label, text } => {
                if scope.count(label) > 0 {
                    vec![text.clone()]
                } else {
                    Vec::new()
                }
            }
            FeatureRule::Silent { .. } => Vec::new(),
            FeatureRule::MeanRatio(rule) => {
                let threshold = match scope.threshold(&rule.feature) {
                    Some(threshold) => threshold,
                    None => return Vec::new(),
                };
                predicates::mean_ratio(scope, &rule.numerator, rule.samples, &rule.denominator, rule.measure)
                    .and_then(|r| threshold.classify(r))
                    .map(|text| vec![text.to_string()])
                    .unwrap_or_default()
            }
            FeatureRule::Containment(rule) => {
                let line = match predicates::containment(scope, &rule.container, &rule.targets) {
                    Containment::Inside => &rule.inside_text,
                    Containment::ContainerMissing => &rule.missing_text,
                    Containment::Outside => &rule.outside_text,
                };
                vec![line.clone()]
            }
        }
    }
}
