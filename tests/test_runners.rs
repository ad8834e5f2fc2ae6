extern crate htp_interpret;

use std::sync::Arc;
use htp_interpret::analysis_runners::{analysis_worker, analyze_batch};
use htp_interpret::analyzers::HtpAnalyzer;
use htp_interpret::common::DrawingType;
use htp_interpret::data::send_channels::analysis_channels;
use htp_interpret::data::TimeCalc;

mod fixtures;
use fixtures::{det, house_scenario, house_scenario_lines, set};

#[test]
fn batch_keeps_input_order() {
    let analyzer = HtpAnalyzer::default();
    let sets = vec![
        house_scenario(),
        set(DrawingType::Tree, vec![det("나무전체", 0., 0., 100., 100.)]),
        set(DrawingType::Person, vec![det("사람전체", 1000., 0., 100., 100.)]),
        house_scenario(),
    ];

    let results = analyze_batch(&analyzer, &sets);

    let types: Vec<DrawingType> = results.iter().map(|r| r.drawing_type).collect();
    assert_eq!(types, vec![DrawingType::House, DrawingType::Tree, DrawingType::Person, DrawingType::House]);
    assert_eq!(results[0], results[3]);
    assert_eq!(results[1].lines()[2], "No 'crown' found.");
    assert_eq!(results[2].lines()[1], "Right position: Future-oriented attitude, extroverted tendencies.");
}

#[cfg(test)]
#[tokio::test]
async fn worker_round_trip() {
    let (send_state, analysis_state) = analysis_channels();
    let analyzer = Arc::new(HtpAnalyzer::default());

    let worker = tokio::task::spawn_blocking(move || analysis_worker(analysis_state, analyzer));

    let loop_count = 5;
    for _ in 0..loop_count {
        send_state.req_tx.send(Box::new(house_scenario())).unwrap();
    }
    drop(send_state.req_tx);

    let mut received = 0;
    while let Ok(result) = send_state.res_rx.recv() {
        assert_eq!(result.lines(), house_scenario_lines().as_slice());
        received += 1;
    }
    assert_eq!(received, loop_count);

    worker.await.unwrap().unwrap();
}

#[cfg(test)]
#[tokio::test]
async fn worker_fails_without_receiver() {
    let (send_state, analysis_state) = analysis_channels();
    let analyzer = Arc::new(HtpAnalyzer::default());

    send_state.req_tx.send(Box::new(house_scenario())).unwrap();
    drop(send_state);

    let worker = tokio::task::spawn_blocking(move || analysis_worker(analysis_state, analyzer));
    assert!(worker.await.unwrap().is_err());
}

#[test]
fn time_calc_per_drawing_type() {
    let mut timings = TimeCalc::default();
    timings.add(DrawingType::House, std::time::Duration::from_millis(4));
    timings.add(DrawingType::House, std::time::Duration::from_millis(2));
    timings.add(DrawingType::Tree, std::time::Duration::from_millis(1));

    assert_eq!(timings.n(DrawingType::House), 2);
    assert_eq!(timings.avg(DrawingType::House), Some(std::time::Duration::from_millis(3)));
    assert_eq!(timings.avg(DrawingType::Person), None);
    assert_eq!(timings.total(), std::time::Duration::from_millis(7));

    timings.clear();
    assert_eq!(timings.n(DrawingType::House), 0);
}
