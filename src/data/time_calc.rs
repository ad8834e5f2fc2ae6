use std::collections::HashMap;
use std::time::Duration;
use crate::common::DrawingType;

/// Accumulated analysis time per drawing type.
#[derive(Debug, Default)]
pub struct TimeCalc {
    runs: HashMap<DrawingType, (usize, Duration)>,
}

impl TimeCalc {
    pub fn add(&mut self, drawing_type: DrawingType, elapsed: Duration) {
        let entry = self.runs.entry(drawing_type).or_insert((0, Duration::ZERO));
        entry.0 += 1;
        entry.1 += elapsed;
    }

    pub fn n(&self, drawing_type: DrawingType) -> usize {
        self.runs.get(&drawing_type).map(|(n, _)| *n).unwrap_or(0)
    }

    pub fn total(&self) -> Duration {
        self.runs.values().map(|(_, d)| *d).sum::<Duration>()
    }

    pub fn avg(&self, drawing_type: DrawingType) -> Option<Duration> {
        let (n, total) = self.runs.get(&drawing_type)?;
        if *n == 0 {
            return None;
        }
        Some(*total / *n as u32)
    }

    pub fn log_summary(&self) {
        for drawing_type in [DrawingType::House, DrawingType::Tree, DrawingType::Person] {
            if let Some(avg) = self.avg(drawing_type) {
                log::info!("{} | Analyses={} | Avg={:.2?}", drawing_type, self.n(drawing_type), avg);
            }
        }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
