//! Benchmark harness: repeated randomized trials across a set of input
//! sizes, averaged per (algorithm, size) pair into a [`BenchmarkTable`].

use std::time::{Duration, Instant};

use log::debug;
use rand::seq::index;

use crate::error::Error;
use crate::sorts::{bubble, insertion, selection};

type SortFn = fn(&mut [i64]);

/// The measured algorithms, in report order.
const ALGORITHMS: &[(&str, SortFn)] = &[
    ("Insertion Sort", insertion::sort::<i64>),
    ("Selection Sort", selection::sort::<i64>),
    ("Bubble Sort", bubble::sort::<i64>),
];

/// Harness configuration: which input sizes to measure and how many trials
/// to average per (algorithm, size) pair.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Input sizes, in the order they should appear in the results.
    pub sizes: Vec<usize>,
    /// Trials per (algorithm, size) pair, at least 1.
    pub trials: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![3, 15, 25, 75, 150, 250, 600, 1200, 2500, 6000],
            trials: 3,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.sizes.is_empty() {
            return Err(Error::Config("at least one input size is required".into()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::Config("input sizes must be positive".into()));
        }
        if self.trials == 0 {
            return Err(Error::Config("at least one trial is required".into()));
        }
        Ok(())
    }
}

/// Averaged results: one row per algorithm, one duration per configured
/// size, in size order.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    sizes: Vec<usize>,
    rows: Vec<(String, Vec<Duration>)>,
}

impl BenchmarkTable {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, name: &str, durations: Vec<Duration>) {
        debug_assert_eq!(durations.len(), self.sizes.len());
        self.rows.push((name.to_string(), durations));
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Duration])> {
        self.rows
            .iter()
            .map(|(name, durations)| (name.as_str(), durations.as_slice()))
    }
}

/// A fresh sequence of `size` distinct integers, drawn without replacement
/// from `0..size * 10` so duplicate-heavy sampling cannot skew the runs.
pub fn random_sequence(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    index::sample(&mut rng, size * 10, size)
        .into_iter()
        .map(|v| v as i64)
        .collect()
}

/// Runs the full measurement matrix and assembles the results table.
///
/// Every trial sorts a sequence generated just for it, so no algorithm ever
/// sees another invocation's already-sorted output.
pub fn run(config: &BenchConfig) -> Result<BenchmarkTable, Error> {
    config.validate()?;

    let mut per_algorithm: Vec<Vec<Duration>> =
        vec![Vec::with_capacity(config.sizes.len()); ALGORITHMS.len()];

    for &size in &config.sizes {
        for (averages, (name, sort)) in per_algorithm.iter_mut().zip(ALGORITHMS) {
            let mut total = Duration::ZERO;
            for _ in 0..config.trials {
                let mut data = random_sequence(size);
                let start = Instant::now();
                sort(&mut data);
                total += start.elapsed();
            }
            let average = total / config.trials;
            debug!("{name}, size {size}: {:.6}s avg", average.as_secs_f64());
            averages.push(average);
        }
    }

    let mut table = BenchmarkTable::new(config.sizes.clone());
    for ((name, _), durations) in ALGORITHMS.iter().zip(per_algorithm) {
        table.push_row(name, durations);
    }
    Ok(table)
}
