use log::debug;
use rand::seq::index::sample;
use rand::Rng;
use serde::Serialize;

use crate::graph::RoadGraph;
use crate::route::{RouteResult, RouteStatus};

/// A randomly generated route.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedRoute {
    /// A unique name for the route, such as `route_0`.
    pub id: String,
    /// The start junction.
    pub from: String,
    /// The end junction.
    pub to: String,
    /// The route itself.
    pub route: RouteResult,
}

/// Generates complete routes between random pairs of junctions.
///
/// Iteration ends once `max_attempts` consecutive junction pairs fail to
/// produce a complete, non-empty route.
pub struct RouteGenerator<'a, R> {
    graph: &'a RoadGraph,
    junctions: Vec<&'a str>,
    rng: R,
    max_attempts: usize,
    count: usize,
}

impl<'a, R: Rng> RouteGenerator<'a, R> {
    /// Creates a route generator.
    pub fn new(graph: &'a RoadGraph, rng: R, max_attempts: usize) -> Self {
        Self {
            graph,
            junctions: graph.junctions().map(|j| j.id()).collect(),
            rng,
            max_attempts,
            count: 0,
        }
    }

    /// Attempts to generate the next route.
    pub fn next_route(&mut self) -> Option<GeneratedRoute> {
        if self.junctions.len() < 2 {
            return None;
        }
        for _ in 0..self.max_attempts {
            let pair = sample(&mut self.rng, self.junctions.len(), 2);
            let (from, to) = (self.junctions[pair.index(0)], self.junctions[pair.index(1)]);
            let Ok(route) = self.graph.compute_route(from, to) else {
                continue;
            };
            if route.status() != RouteStatus::Complete || route.edges.is_empty() {
                debug!("Discarding route {} -> {}: {:?}", from, to, route.status());
                continue;
            }
            let id = format!("route_{}", self.count);
            self.count += 1;
            return Some(GeneratedRoute {
                id,
                from: from.to_string(),
                to: to.to_string(),
                route,
            });
        }
        None
    }
}

impl<'a, R: Rng> Iterator for RouteGenerator<'a, R> {
    type Item = GeneratedRoute;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_route()
    }
}
