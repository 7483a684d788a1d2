//! Workload generator and invariant checkers for benchmarking
//! `quickunion-core`.
//!
//! Workloads are deterministic: the same [`WorkloadConfig`] always yields the
//! same union and query sequences.

pub mod correctness;
pub mod generator;

pub use generator::{SizeTier, Workload, WorkloadConfig, generate_workload};
