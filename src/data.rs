mod class_labels;
mod drawing_record;
mod filesystem_access;
mod interpretation;
mod label_dictionary;
mod threshold_table;
mod time_calc;
pub mod send_channels;

pub use class_labels::ClassLabels;
pub use drawing_record::{DrawingRecord, RecordAnnotations, RecordMeta};
pub use interpretation::InterpretationResult;
pub use label_dictionary::{to_canonical, LabelDictionary};
pub use threshold_table::{Comparison, RatioThreshold, ThresholdTable};

pub use filesystem_access::FsAccess;
pub use time_calc::TimeCalc;
