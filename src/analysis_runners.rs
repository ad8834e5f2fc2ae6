use std::sync::Arc;
use std::time::Instant;
use rayon::prelude::*;
use crate::analyzers::HtpAnalyzer;
use crate::common::DetectionSet;
use crate::data::send_channels::AnalysisState;
use crate::data::{InterpretationResult, TimeCalc};

/// Analyzes every set in parallel. Results come back in input order.
pub fn analyze_batch(analyzer: &HtpAnalyzer, sets: &[DetectionSet]) -> Vec<InterpretationResult> {
    sets.par_iter().map(|set| analyzer.analyze(set)).collect()
}

/// Serves analysis requests until every request sender is dropped.
///
/// Fails only when the result receiver has gone away.
pub fn analysis_worker(state: AnalysisState, analyzer: Arc<HtpAnalyzer>) -> anyhow::Result<()> {
    let mut timings = TimeCalc::default();

    // MESSAGE LOOP STARTS HERE
    while let Ok(set) = state.req_rx.recv() {
        let analysis_time = Instant::now();
        let result = analyzer.analyze(&set);
        timings.add(set.drawing_type, analysis_time.elapsed());

        state.res_tx.send(Box::new(result))?;
    }

    log::info!("Analysis worker stopping, request channel closed after {:.2?} of work", timings.total());
    timings.log_summary();
    Ok(())
}
