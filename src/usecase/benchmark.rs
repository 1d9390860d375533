use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use std::time::{Duration, Instant};

/// One timed run of a detector.
#[derive(Debug, Clone)]
pub struct AlgorithmTiming {
    pub algorithm: &'static str,
    pub elapsed: Duration,
    pub result: SccResult,
}

/// Repeated timings of one detector.
#[derive(Debug, Clone)]
pub struct AlgorithmSummary {
    pub algorithm: &'static str,
    pub rounds: usize,
    pub min: Duration,
    pub mean: Duration,
    /// Partition from the last round.
    pub result: SccResult,
}

#[derive(Debug, Clone, Default)]
pub struct BenchmarkReport {
    pub summaries: Vec<AlgorithmSummary>,
}

impl BenchmarkReport {
    pub fn get(&self, algorithm: &str) -> Option<&AlgorithmSummary> {
        self.summaries.iter().find(|s| s.algorithm == algorithm)
    }

    pub fn fastest(&self) -> Option<&AlgorithmSummary> {
        self.summaries.iter().min_by_key(|s| s.min)
    }
}

/// Times one detector on a private copy of `graph`.
///
/// The copy is made before the clock starts and carries no derived state, so a
/// detector never runs on adjacency another detector has already touched.
pub fn time_detector(detector: &dyn SccDetector, graph: &Graph) -> AlgorithmTiming {
    let copy = graph.clone();

    let start = Instant::now();
    let result = detector.compute_scc(&copy);
    let elapsed = start.elapsed();

    AlgorithmTiming {
        algorithm: detector.name(),
        elapsed,
        result,
    }
}

fn mean_duration(total: Duration, rounds: usize) -> Duration {
    total.div_f64(rounds as f64)
}

/// Runs every detector `rounds` times (at least once) and reports min/mean.
pub fn benchmark(detectors: &[&dyn SccDetector], graph: &Graph, rounds: usize) -> BenchmarkReport {
    let rounds = rounds.max(1);
    let mut summaries = Vec::with_capacity(detectors.len());

    for &detector in detectors {
        let mut total = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut last = None;

        for _ in 0..rounds {
            let timing = time_detector(detector, graph);
            total += timing.elapsed;
            min = min.min(timing.elapsed);
            last = Some(timing.result);
        }

        if let Some(result) = last {
            summaries.push(AlgorithmSummary {
                algorithm: detector.name(),
                rounds,
                min,
                mean: mean_duration(total, rounds),
                result,
            });
        }
    }

    BenchmarkReport { summaries }
}
