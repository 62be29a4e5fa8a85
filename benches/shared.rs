#![allow(dead_code)]

//! Shared utilities for benchmarks.
//!
//! This module provides benchmark parameters, a deterministic point cloud
//! generator, and a Criterion configuration shared by all benchmark groups.

use concaveman::Point;
use criterion::Criterion;

//
// Benchmark Parameters
//
pub const BENCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
pub const BENCH_NUM_POINTS: usize = 1000;
pub const BENCH_NODE_CAPACITY: usize = 9;

//
// Data Generation
//
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Generates a reproducible point cloud in the [0, 100) square.
pub fn generate_points(n: usize) -> Vec<Point> {
    let mut rng = Lcg(0xbe4c4);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * 100.0, rng.next_f64() * 100.0))
        .collect()
}

// Configure Criterion with a timeout for benchmarks
pub fn configure_criterion() -> Criterion {
    Criterion::default().measurement_time(BENCH_TIMEOUT)
}
