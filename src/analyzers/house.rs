use crate::analyzers::FeatureRule;
use crate::common::BandAxis;

/// Compared against the wall area, in output order.
const RATIO_FEATURES: [&str; 4] = ["door", "roof", "window", "smoke"];

pub(crate) fn rules() -> Vec<FeatureRule> {
    let mut rules = vec![
        FeatureRule::BoxDump,
        FeatureRule::position(
            "house_whole",
            BandAxis::Vertical,
            [
                "Top position: idealistic and fanciful",
                "Center position: A stable home environment, reflecting the sense of reality",
                "Bottom position: Realistic, Unstable Sentiment",
            ],
            "No 'house' label found.",
        ),
        FeatureRule::reference("wall", false),
    ];
    rules.extend(RATIO_FEATURES.iter().map(|feature| FeatureRule::area_ratio(feature)));
    rules.extend([
        FeatureRule::presence("road", "Road existence: Welcome to Social Interrelationships"),
        FeatureRule::presence("grass", "Grass existence: psychological stability"),
        FeatureRule::presence("fence", "Fence existence: trying to build a psychological bulwark"),
    ]);
    rules
}
