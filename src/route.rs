use itertools::Itertools;
use serde::Serialize;

use crate::error::RouteError;
use crate::graph::RoadGraph;
use crate::math::distance;

mod dijkstra;
mod materialize;

/// A route through the road network.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RouteResult {
    /// The streets to follow, in order.
    pub edges: Vec<String>,
    /// The junctions visited, from start to end. Empty if no path exists.
    pub junctions: Vec<String>,
    /// The straight-line length of the junction path.
    pub distance: f64,
    /// The number of hops for which no street could be found.
    pub missing_segments: usize,
}

/// How usable a [RouteResult] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RouteStatus {
    /// Every hop of the path is covered by a street.
    Complete,
    /// Some hops have no street, so the route is not contiguous.
    Incomplete { missing: usize },
    /// The end junction cannot be reached from the start junction.
    NoPathExists,
}

impl RouteResult {
    /// Gets the status of the route.
    pub fn status(&self) -> RouteStatus {
        if self.junctions.is_empty() {
            RouteStatus::NoPathExists
        } else if self.missing_segments > 0 {
            RouteStatus::Incomplete {
                missing: self.missing_segments,
            }
        } else {
            RouteStatus::Complete
        }
    }

    /// Returns true if every hop of the route is covered by a street.
    pub fn is_contiguous(&self) -> bool {
        self.missing_segments == 0
    }
}

impl RoadGraph {
    /// Computes a route between two junctions.
    ///
    /// Fails only if either junction is unknown. An unreachable end yields
    /// an empty route with [`RouteStatus::NoPathExists`].
    pub fn compute_route(&self, start: &str, end: &str) -> Result<RouteResult, RouteError> {
        let path = self.find_path(start, end)?;
        Ok(self.materialize(&path))
    }

    /// Finds the shortest junction path between two junctions.
    /// The path is empty if the end cannot be reached.
    pub fn find_path(&self, start: &str, end: &str) -> Result<Vec<&str>, RouteError> {
        let lookup = |id: &str| {
            self.junction_key(id)
                .ok_or_else(|| RouteError::JunctionNotFound(id.to_string()))
        };
        let (start, end) = (lookup(start)?, lookup(end)?);
        let path: Vec<&str> = dijkstra::shortest_path(self, start, end)
            .map(|(keys, _)| keys.into_iter().map(|k| self.junction_at(k).id()).collect())
            .unwrap_or_default();
        Ok(path)
    }

    /// Turns a junction path into a route.
    pub fn materialize(&self, path: &[&str]) -> RouteResult {
        let (edges, missing_segments) = materialize::resolve_streets(self, path);
        let length: f64 = path
            .iter()
            .filter_map(|id| self.junction(id).map(|j| j.pos()))
            .tuple_windows()
            .map(|(a, b)| distance(a, b))
            .sum();
        RouteResult {
            edges,
            junctions: path.iter().map(|id| id.to_string()).collect(),
            distance: length,
            missing_segments,
        }
    }
}
