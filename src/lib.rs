// src/lib.rs

//! Batching topological sort for task dependency graphs.
//!
//! Given a DAG where each vertex lists its *dependents* (the tasks it
//! unblocks on completion), [`batching_toposort`] produces an ordered
//! sequence of batches: every task in batch `k` depends only on tasks in
//! earlier batches, and tasks within a batch are mutually independent, so a
//! caller may execute each batch in parallel before moving to the next.
//!
//! This crate is the planning primitive only. Executing tasks, weighting
//! them, or persisting graphs is left to the caller.
//!
//! ```
//! use batching_toposort::{TaskGraph, batching_toposort};
//!
//! let mut graph = TaskGraph::new();
//! graph.add_dependent("build", "test");
//! graph.add_dependent("build", "lint");
//! graph.add_dependent("test", "deploy");
//! graph.add_dependent("lint", "deploy");
//!
//! let batches = batching_toposort(&graph).unwrap();
//! assert_eq!(
//!     batches,
//!     vec![vec!["build"], vec!["test", "lint"], vec!["deploy"]],
//! );
//! ```

pub mod degree;
pub mod errors;
pub mod graph;
pub mod sort;

pub use degree::count_in_degrees;
pub use errors::{CycleError, Result};
pub use graph::TaskGraph;
pub use sort::batching_toposort;
