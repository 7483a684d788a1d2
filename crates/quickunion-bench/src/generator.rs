//! Random union/query workloads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Universe size.
    pub elements: usize,
    /// Number of `union` calls.
    pub unions: usize,
    /// Number of `connected` queries.
    pub queries: usize,
    /// Fraction of unions that join an element to one of its immediate
    /// neighbours (0.0-1.0). Neighbour unions grow long runs before they are
    /// joined, which exercises path halving harder than uniform pairs.
    pub locality: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1K elements
    Small,
    /// 10K elements
    Medium,
    /// 100K elements
    Large,
    /// 1M elements
    XLarge,
}

impl SizeTier {
    /// Returns the default `WorkloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> WorkloadConfig {
        let elements = match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
            SizeTier::XLarge => 1_000_000,
        };
        WorkloadConfig {
            seed,
            elements,
            unions: elements,
            queries: elements,
            locality: 0.3,
        }
    }
}

/// A generated sequence of operations over `[0, elements)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub elements: usize,
    pub unions: Vec<(usize, usize)>,
    pub queries: Vec<(usize, usize)>,
}

/// Generates a workload from the given configuration.
///
/// An empty universe yields empty union and query lists regardless of the
/// requested counts.
pub fn generate_workload(config: &WorkloadConfig) -> Workload {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.elements;
    if n == 0 {
        return Workload {
            elements: 0,
            unions: Vec::new(),
            queries: Vec::new(),
        };
    }

    let locality = if config.locality.is_nan() {
        0.0
    } else {
        config.locality.clamp(0.0, 1.0)
    };
    let unions = (0..config.unions)
        .map(|_| {
            let p = rng.gen_range(0..n);
            if n > 1 && rng.gen_bool(locality) {
                (p, (p + 1) % n)
            } else {
                (p, rng.gen_range(0..n))
            }
        })
        .collect();
    let queries = (0..config.queries)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();

    Workload {
        elements: n,
        unions,
        queries,
    }
}
