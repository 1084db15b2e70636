// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

/// The peeling loop finished while one or more vertices still had unresolved
/// prerequisite edges, which proves the graph contains at least one cycle.
///
/// Carries no cycle membership: callers that need to know *which* vertices
/// form the cycle must run a separate cycle-finding pass.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cycle detected; batching toposort requires an acyclic graph")]
pub struct CycleError;

pub type Result<T> = std::result::Result<T, CycleError>;
