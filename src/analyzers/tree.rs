use crate::analyzers::FeatureRule;
use crate::common::BandAxis;

// Everything after the crown needs a crown area to compare against.
pub(crate) fn rules() -> Vec<FeatureRule> {
    vec![
        FeatureRule::BoxDump,
        FeatureRule::position(
            "tree_whole",
            BandAxis::Vertical,
            [
                "Top position: goal-oriented tendency",
                "Center position: inner stability, growth desire",
                "Bottom position: self-protective attitude",
            ],
            "No 'whole tree' label found.",
        ),
        FeatureRule::reference("crown", true),
        FeatureRule::area_ratio("trunk"),
        FeatureRule::area_ratio("branch"),
        FeatureRule::containment(
            "trunk",
            &["squirrel", "bird"],
            "Animal inside the hole: identification with animals, attachment-related, seeking stability, symbol of the womb",
            "No pillar found.",
            "No animal inside the tree.",
        ),
    ]
}
