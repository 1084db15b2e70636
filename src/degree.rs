// src/degree.rs

//! In-degree bookkeeping for [`TaskGraph`].

use std::hash::Hash;

use indexmap::IndexMap;

use crate::graph::TaskGraph;

/// Compute the in-degree of every vertex in `graph`.
///
/// Every vertex key is seeded at zero, then each dependent reference bumps
/// the target's count by one. The result covers every identifier that
/// appears anywhere in the graph, as a key or as a dependent, so isolated
/// vertices and dangling dependents are both represented. Entries keep the
/// order in which their identifiers were first seen.
///
/// Pure, `O(|V| + |E|)`, no effect on the input.
pub fn count_in_degrees<T>(graph: &TaskGraph<T>) -> IndexMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts: IndexMap<T, usize> = IndexMap::with_capacity(graph.len());

    for (vertex, dependents) in graph.iter() {
        counts.entry(vertex.clone()).or_insert(0);
        for dependent in dependents {
            *counts.entry(dependent.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Vertices whose current in-degree is zero, in map order.
pub(crate) fn roots<T>(counts: &IndexMap<T, usize>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    counts
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(id, _)| id.clone())
        .collect()
}

/// Whether any vertex still has a non-zero in-degree.
pub(crate) fn any_blocked<T>(counts: &IndexMap<T, usize>) -> bool
where
    T: Eq + Hash,
{
    counts.values().any(|&degree| degree != 0)
}
