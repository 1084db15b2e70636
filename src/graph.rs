// src/graph.rs

use std::hash::Hash;

use indexmap::IndexMap;

/// Task dependency graph keyed by an opaque task identifier.
///
/// Edges point from a prerequisite to the tasks it unblocks: the list stored
/// under `p` holds the *dependents* of `p`, not its dependencies. Vertices
/// keep their insertion order, and that order (together with each vertex's
/// dependent-list order) is what makes [`batching_toposort`] deterministic
/// for a given construction sequence.
///
/// An identifier that is referenced as a dependent but never added as a
/// vertex of its own is tolerated: [`dependents_of`] treats it as having no
/// dependents. [`add_dependent`] seeds both endpoints, so graphs built
/// through it always have an entry per vertex.
///
/// [`batching_toposort`]: crate::batching_toposort
/// [`dependents_of`]: TaskGraph::dependents_of
/// [`add_dependent`]: TaskGraph::add_dependent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskGraph<T>
where
    T: Eq + Hash,
{
    nodes: IndexMap<T, Vec<T>>,
}

impl<T> TaskGraph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(capacity),
        }
    }

    /// Ensure `id` is present as a vertex, with an empty dependent list if it
    /// was not already known.
    pub fn add_task(&mut self, id: T) {
        self.nodes.entry(id).or_default();
    }

    /// Record the edge `prerequisite -> dependent`.
    ///
    /// Both endpoints are seeded as vertices. Edges form a set, not a
    /// multiset: recording the same pair twice inflates the dependent's
    /// in-degree and can make the sort report a cycle that does not exist.
    /// Deduplicating is the caller's responsibility.
    pub fn add_dependent(&mut self, prerequisite: T, dependent: T) {
        self.nodes
            .entry(prerequisite)
            .or_default()
            .push(dependent.clone());
        self.nodes.entry(dependent).or_default();
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &T) -> bool {
        self.nodes.contains_key(id)
    }

    /// All vertex identifiers, in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &T> {
        self.nodes.keys()
    }

    /// Immediate dependents of `id`, or an empty slice if `id` is unknown.
    pub fn dependents_of(&self, id: &T) -> &[T] {
        self.nodes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(vertex, dependents)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &[T])> {
        self.nodes.iter().map(|(id, deps)| (id, deps.as_slice()))
    }
}

impl<T> FromIterator<(T, Vec<T>)> for TaskGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (T, Vec<T>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<T> Extend<(T, Vec<T>)> for TaskGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Inserts each `(vertex, dependents)` pair, replacing the dependent list
    /// of a vertex that was already present.
    fn extend<I: IntoIterator<Item = (T, Vec<T>)>>(&mut self, iter: I) {
        for (id, dependents) in iter {
            self.nodes.insert(id, dependents);
        }
    }
}
