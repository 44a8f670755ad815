//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! Every algorithm exposes its variants through [`AlgorithmRunner`], so the
//! CLI can list, verify and benchmark them without knowing their signatures.

use crate::error::Result;
use crate::utils::bench::Measurement;
use crate::utils::timer::VariantResult;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs one measured execution of a variant
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Returns (measurement, optional result value).
    /// Timing happens inside the closure so the call through `dyn FnMut`
    /// is not part of the measurement.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Trait that all algorithm runners implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "binary_search")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g., "search", "range_query")
    fn category(&self) -> &'static str;

    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures for each variant over generated input of `size` elements.
    /// Each closure does ONE measured execution; the timer handles warmup,
    /// ordering and repetition.
    fn get_variant_closures<'a>(&'a self, size: usize) -> Vec<VariantClosure<'a>>;

    /// Verify every variant against the `original` reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::search::binary_search::BinarySearchRunner);
    registry.register(crate::range_query::prefix_sum::PrefixSumRunner);
    registry.register(crate::subarray::max_subarray::MaxSubarrayRunner);

    registry
}
