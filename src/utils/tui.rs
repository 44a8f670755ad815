//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::error::Result;
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::runner::BenchmarkReport;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original (0), Rust (1), C (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust variants, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
    ];
    let var_line = format!("Variants:  {}", algo.available_variants().join(", "));

    let content_width = lines
        .iter()
        .chain(std::iter::once(&var_line))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in &lines {
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("├{}┤", border);
    println!("│ {:<width$} │", truncate(&var_line, content_width), width = content_width);
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single input size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, filtered: bool) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results.first().map(|r| r.avg_nanos_f64).unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);
    let runs = results.first().map(|r| r.runs).unwrap_or(0);

    let filter_note = if filtered { ", filtered" } else { "" };
    println!("  Size: {} ({} runs{})", size, runs, filter_note);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev_ns / result.avg_nanos_f64
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        let display_name = match crate::utils::C_COMPILER_NAME {
            Some(c) if result.name.starts_with("c-") => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            crate::utils::bench::format_measurement(result.avg_time),
            crate::utils::bench::format_measurement(result.min_time),
            crate::utils::bench::format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every algorithm's tables from a finished benchmark session
pub fn print_report(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    report: &BenchmarkReport,
    filtered: bool,
) {
    for (algo, per_size) in algorithms.iter().zip(&report.results) {
        print_algo_info_box(*algo);

        for (&size, results) in sample_sizes.iter().zip(per_size) {
            let mut sorted = results.clone();
            sort_variants(&mut sorted);
            print_results_table(&sorted, size, filtered);
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Sequence-Algo Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<16} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<16}   variants: {}", "", algo.available_variants().join(", "));
    }
}

/// Run every runner's verification, printing one line per algorithm.
///
/// Returns the first failure after all algorithms have been checked.
pub fn run_verification(registry: &AlgorithmRegistry) -> Result<()> {
    let mut first_error = None;

    for algo in registry.all() {
        match algo.verify() {
            Ok(()) => println!(
                "  ✅ {:<16} {} variants agree with original",
                algo.name(),
                algo.available_variants().len()
            ),
            Err(e) => {
                eprintln!("  ❌ {:<16} {}", algo.name(), e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
