// src/sort.rs

//! The batch peeling loop: batched Kahn's algorithm over a [`TaskGraph`].

use std::hash::Hash;

use tracing::debug;

use crate::degree::{any_blocked, count_in_degrees, roots};
use crate::errors::{CycleError, Result};
use crate::graph::TaskGraph;

/// Topologically sort `graph` into batches of mutually independent tasks.
///
/// Batch 0 holds every vertex with no prerequisites; each later batch holds
/// the vertices unblocked by the batch before it. For every edge
/// `p -> d` in the input, `p`'s batch index is strictly less than `d`'s, so
/// a caller may run each batch in parallel and feed the next batch once the
/// current one completes.
///
/// The graph is read-only throughout; the returned batches are newly
/// allocated. Within a batch, vertices appear in the order they reached
/// zero in-degree, which is deterministic for a given construction sequence
/// but carries no priority meaning.
///
/// Fails with [`CycleError`] if any vertex is never unblocked, i.e. the
/// graph is not acyclic. No partial result is returned in that case.
pub fn batching_toposort<T>(graph: &TaskGraph<T>) -> Result<Vec<Vec<T>>>
where
    T: Eq + Hash + Clone,
{
    let mut in_degrees = count_in_degrees(graph);
    let mut sorted: Vec<Vec<T>> = Vec::new();

    let mut frontier = roots(&in_degrees);

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();

        for task in &frontier {
            for dependent in graph.dependents_of(task) {
                // Every dependent was seeded by count_in_degrees.
                if let Some(degree) = in_degrees.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        next_frontier.push(dependent.clone());
                    }
                }
            }
        }

        debug!(
            batch = sorted.len(),
            size = frontier.len(),
            "emitting batch"
        );
        sorted.push(std::mem::replace(&mut frontier, next_frontier));
    }

    if any_blocked(&in_degrees) {
        debug!("residual in-degrees after peeling; graph has a cycle");
        return Err(CycleError);
    }

    Ok(sorted)
}
