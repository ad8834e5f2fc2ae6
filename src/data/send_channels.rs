use crate::common::DetectionSet;
use crate::data::InterpretationResult;

/// Worker side of the analysis pipeline.
#[derive(Debug)]
pub struct AnalysisState {
    pub req_rx: crossbeam_channel::Receiver<Box<DetectionSet>>,
    pub res_tx: crossbeam_channel::Sender<Box<InterpretationResult>>,
}

/// Caller side of the analysis pipeline.
#[derive(Debug)]
pub struct SendState {
    pub req_tx: crossbeam_channel::Sender<Box<DetectionSet>>,
    pub res_rx: crossbeam_channel::Receiver<Box<InterpretationResult>>,
}

pub fn analysis_channels() -> (SendState, AnalysisState) {
    let (req_tx, req_rx) = crossbeam_channel::unbounded();
    let (res_tx, res_rx) = crossbeam_channel::unbounded();
    (SendState { req_tx, res_rx }, AnalysisState { req_rx, res_tx })
}
