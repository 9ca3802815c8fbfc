use itertools::Itertools;
use log::warn;

use crate::graph::RoadGraph;

/// Resolves the street carrying each hop of a junction path.
///
/// Hops with no matching street are logged and skipped; the number of
/// skipped hops is returned alongside the street identifiers.
pub(crate) fn resolve_streets(graph: &RoadGraph, path: &[&str]) -> (Vec<String>, usize) {
    let mut edges = Vec::with_capacity(path.len().saturating_sub(1));
    let mut missing = 0;
    for (from, to) in path.iter().tuple_windows() {
        match graph.find_edge_between(from, to) {
            Some(edge) => edges.push(edge.to_string()),
            None => {
                warn!("No street connects {} to {}", from, to);
                missing += 1;
            }
        }
    }
    (edges, missing)
}
