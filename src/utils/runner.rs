//! Benchmark orchestration across algorithms and input sizes, plus CSV export.

use crate::error::Result;
use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a benchmark session
pub struct BenchmarkReport {
    /// Indexed as `results[algo_idx][size_idx]`
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Benchmark every algorithm at every size.
pub fn run_benchmarks(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    config: &TimingConfig,
) -> BenchmarkReport {
    let mut results = Vec::with_capacity(algorithms.len());
    let mut raw_data = Vec::new();

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sample_sizes.len());

        for &size in sample_sizes {
            let measured = measure_variants(algo.get_variant_closures(size), config);

            raw_data.extend(measured.iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                result_sample: r.result_sample,
            }));
            per_size.push(measured);
        }

        results.push(per_size);
    }

    BenchmarkReport { results, raw_data }
}

/// Write timing rows as CSV.
pub fn write_csv<W: std::io::Write>(out: &mut W, data: &[RawTimingData]) -> Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,avg_time_{},result",
        crate::utils::bench::unit_name()
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

/// Export timing data to a CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, data)?;
    std::io::Write::flush(&mut file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_registry;
    use crate::utils::timer::PinStrategy;

    #[test]
    fn test_run_benchmarks_shapes() {
        let registry = build_registry();
        let algos: Vec<&dyn AlgorithmRunner> = registry.all().iter().map(|a| a.as_ref()).collect();
        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::Off,
            filter_outliers: false,
            seed: Some(9),
        };

        let report = run_benchmarks(&algos, &[16, 64], &config);

        assert_eq!(report.results.len(), algos.len());
        let mut expected_rows = 0;
        for (algo, per_size) in algos.iter().zip(&report.results) {
            assert_eq!(per_size.len(), 2);
            for results in per_size {
                assert_eq!(results.len(), algo.available_variants().len());
                expected_rows += results.len();
            }
        }
        assert_eq!(report.raw_data.len(), expected_rows);
    }

    #[test]
    fn test_write_csv() {
        let rows = vec![
            RawTimingData {
                algo_name: "max_subarray".to_string(),
                variant_name: "original".to_string(),
                input_size: 64,
                avg_nanos: 120,
                result_sample: Some(6.0),
            },
            RawTimingData {
                algo_name: "max_subarray".to_string(),
                variant_name: "fold".to_string(),
                input_size: 64,
                avg_nanos: 80,
                result_sample: None,
            },
        ];

        let mut out = Vec::new();
        write_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm,variant,compiler,input_size,avg_time_"));
        assert_eq!(lines[1], "max_subarray,original,,64,120,6");
        assert_eq!(lines[2], "max_subarray,fold,,64,80,");
    }
}
