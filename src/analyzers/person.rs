use crate::analyzers::predicates::Measure;
use crate::analyzers::FeatureRule;
use crate::common::BandAxis;

/// Person drawings have no shared reference area; each ratio names its own pair.
/// The head, eye and nose presence checks never report anything.
pub(crate) fn rules() -> Vec<FeatureRule> {
    vec![
        FeatureRule::BoxDump,
        FeatureRule::position(
            "person_whole",
            BandAxis::Horizontal,
            [
                "Left position: Obsession with the past, introverted tendencies.",
                "Center position: Self-centeredness, confidence in interpersonal relationships.",
                "Right position: Future-oriented attitude, extroverted tendencies.",
            ],
            "No 'person_whole' label found.",
        ),
        FeatureRule::mean_ratio("head", "head", 1, "upper_body", Measure::Area),
        FeatureRule::silent("head"),
        FeatureRule::silent("eye"),
        FeatureRule::mean_ratio("eye", "eye", 2, "face", Measure::Area),
        FeatureRule::silent("nose"),
        FeatureRule::mean_ratio("leg", "leg", 2, "upper_body", Measure::Height),
    ]
}
