mod analyzer;
mod drawing_profile;
mod feature_rule;
mod house;
mod person;
mod tree;
pub mod predicates;

pub use analyzer::{Analyzer, HtpAnalyzer};
pub use drawing_profile::DrawingProfile;
pub use feature_rule::{ContainmentRule, FeatureRule, MeanRatioRule, PositionRule, ReferenceRule};
