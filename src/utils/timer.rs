//! Timing system for the variant benchmarks.
//!
//! - CPU cycles or wall-clock time (via features)
//! - Optional CPU core pinning for stable measurements
//! - Randomized, seeded execution order to avoid ordering bias

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

use super::bench::{time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;
use crate::registry::VariantClosure;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around each execution
    #[default]
    PerExecution,
    /// Never pin
    Off,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls before measurement (default: 10)
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Drop the fastest and slowest 1% of samples before computing stats
    pub filter_outliers: bool,
    /// Seed for the execution schedule; time-based when `None`
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            filter_outliers: false,
            seed: None,
        }
    }
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average measurement (cycles are stored as nanoseconds in cycle mode)
    pub avg_time: Duration,
    /// Precise average as f64
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples kept after filtering
    pub runs: usize,
    /// Sample result value, for the relative-error column
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// Every variant is warmed up, then the `(variant, sample)` tasks are
/// shuffled and executed one by one so that no variant systematically
/// benefits from a warm cache or a boosted clock.
pub fn measure_variants(mut variants: Vec<VariantClosure>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant.max(1);

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(time_seed));
    tasks.shuffle(&mut rng);

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let mut nanos: Vec<u64> = measurements[idx].iter().map(|m| to_nanos(*m)).collect();
            if config.filter_outliers {
                nanos = trim_outliers(nanos);
            }
            compute_variant_result(variant.name, variant.description, nanos, result_samples[idx].take())
        })
        .collect()
}

/// Drop the lowest and highest 1% of samples (at least one each side
/// once there are enough samples to spare).
fn trim_outliers(mut nanos: Vec<u64>) -> Vec<u64> {
    nanos.sort_unstable();
    let cut = if nanos.len() >= 10 {
        (nanos.len() / 100).max(1)
    } else {
        0
    };
    nanos.truncate(nanos.len() - cut);
    nanos.drain(..cut);
    nanos
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    nanos: Vec<u64>,
    result_sample: Option<f64>,
) -> VariantResult {
    if nanos.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs: 0,
            result_sample,
        };
    }

    let mut sorted = nanos.clone();
    sorted.sort_unstable();

    let min_ns = sorted[0];
    let max_ns = sorted[sorted.len() - 1];
    let median_ns = sorted[sorted.len() / 2];

    let sum: u64 = nanos.iter().sum();
    let avg_nanos_f64 = sum as f64 / nanos.len() as f64;

    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        runs: nanos.len(),
        result_sample,
    }
}
