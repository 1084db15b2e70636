use std::sync::Once;

use batching_toposort::TaskGraph;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Logs are captured per-test and printed only for failing tests unless the
/// harness runs with `-- --nocapture`. Enable levels with e.g.
/// `RUST_LOG=debug cargo test`.
#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Convert batch literals into the owned form returned by the sort.
#[allow(dead_code)]
pub fn batches(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|batch| batch.iter().map(|id| id.to_string()).collect())
        .collect()
}

/// Build a graph from `(vertex, dependents)` literals.
#[allow(dead_code)]
pub fn graph(entries: &[(&str, &[&str])]) -> TaskGraph<String> {
    entries
        .iter()
        .map(|(id, dependents)| {
            (
                id.to_string(),
                dependents.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}
