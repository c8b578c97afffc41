//! Benchmark command
//!
//! Solves many random word pairs drawn from a dictionary.

use crate::core::Word;
use crate::solver::Ladder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub average_distance: f64,
    pub max_distance: usize,
    pub longest: Option<(String, String)>,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Draw `count` random start/end pairs of equal length
///
/// Both words of a pair come from the same length bucket. A fixed `seed`
/// gives a reproducible sample.
#[must_use]
pub fn sample_pairs(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<(Word, Word)> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut by_length: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
    for word in dictionary {
        by_length.entry(word.len()).or_default().push(word);
    }

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(start) = dictionary.choose(&mut rng) else {
            break;
        };
        let Some(&end) = by_length
            .get(&start.len())
            .and_then(|bucket| bucket.choose(&mut rng))
        else {
            break;
        };
        pairs.push((start.clone(), end.clone()));
    }

    pairs
}

/// Solve every pair and collect distance statistics
///
/// Pairs are solved in parallel; each builds its own index.
pub fn run_benchmark(dictionary: &[Word], pairs: &[(Word, Word)]) -> BenchmarkResult {
    let timer = Instant::now();

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let distances: Vec<(Option<usize>, &Word, &Word)> = pairs
        .par_iter()
        .map(|(start, end)| {
            let distance = Ladder::new(start, end, dictionary)
                .ok()
                .and_then(|ladder| ladder.distance());
            pb.inc(1);
            (distance, start, end)
        })
        .collect();

    pb.finish_and_clear();

    let mut reachable = 0;
    let mut total_distance = 0;
    let mut max_distance = 0;
    let mut longest = None;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (distance, start, end) in distances {
        let Some(distance) = distance else {
            continue;
        };
        reachable += 1;
        total_distance += distance;
        *distribution.entry(distance).or_insert(0) += 1;
        if longest.is_none() || distance > max_distance {
            max_distance = distance;
            longest = Some((start.text().to_string(), end.text().to_string()));
        }
    }

    let duration = timer.elapsed();
    let total_pairs = pairs.len();

    BenchmarkResult {
        total_pairs,
        reachable,
        unreachable: total_pairs - reachable,
        average_distance: if reachable == 0 {
            0.0
        } else {
            total_distance as f64 / reachable as f64
        },
        max_distance,
        longest,
        distribution,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
