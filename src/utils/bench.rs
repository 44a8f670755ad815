//! Measurement primitives shared by every runner.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Opaque start marker returned by [`now`]
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Start = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Start = std::time::Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Start {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Start {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Start) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Start) -> Measurement {
    start.elapsed()
}

/// Raw value of a measurement: cycles, or nanoseconds in wall-clock mode
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Render a stored statistic for the results table.
///
/// Statistics are stored as `Duration` even in cycle mode, where one
/// "nanosecond" stands for one cycle.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(d: Duration) -> String {
    format!("{} {}", d.as_nanos(), unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(d: Duration) -> String {
    format!("{:?}", d)
}

/// Time an expression, returning `(Measurement, value)`.
///
/// The value goes through `black_box` so the work cannot be optimized away.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Random sequence of `size` values drawn uniformly from `-bound..=bound`
pub fn random_sequence(size: usize, bound: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-bound..=bound)).collect()
}

/// Sorted random sequence with repeated values, for search benchmarks
pub fn random_sorted_sequence(size: usize, seed: u64) -> Vec<i64> {
    let bound = (size as i64 / 2).max(1);
    let mut data = random_sequence(size, bound, seed);
    data.sort_unstable();
    data
}
