use std::collections::HashMap;

use log::{debug, warn};
use pathfinding::undirected::connected_components::connected_components;
use slotmap::{SecondaryMap, SlotMap};
use smallvec::SmallVec;

pub use convention::NamingConvention;

use crate::math::Point2d;
use crate::network::NetworkDescription;
use crate::JunctionId;

mod convention;

/// A junction (node) of the road network.
#[derive(Clone, Debug)]
pub struct Junction {
    /// The identifier used by the network description.
    id: String,
    /// The position in network coordinates.
    pos: Point2d,
}

/// A directed street (edge) between two junctions.
#[derive(Clone, Debug)]
pub struct Street {
    /// The street identifier.
    id: String,
    /// The identifier of the junction the street starts at.
    from: String,
    /// The identifier of the junction the street ends at.
    to: String,
    /// Whether the street lies inside a junction.
    internal: bool,
}

/// The outcome of rebuilding a graph's adjacency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// The number of streets linking two known junctions.
    pub accepted: usize,
    /// The number of streets dropped because an endpoint is unknown.
    pub dropped: usize,
}

/// The junctions and streets of a road network.
///
/// Searches only ever borrow the graph immutably, so a built graph can be
/// shared between threads. Any change to the street set requires a call
/// to [`RoadGraph::build_adjacency`] before it is visible to searches.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    /// The identifier conventions of the network.
    convention: NamingConvention,
    /// The junctions in the network.
    junctions: SlotMap<JunctionId, Junction>,
    /// Junction keys indexed by identifier.
    index: HashMap<String, JunctionId>,
    /// The streets, in insertion order.
    streets: Vec<Street>,
    /// The undirected neighbours of each junction, in discovery order.
    adjacency: SecondaryMap<JunctionId, SmallVec<[JunctionId; 4]>>,
}

impl Junction {
    /// Gets the junction identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the position of the junction.
    pub fn pos(&self) -> Point2d {
        self.pos
    }
}

impl Street {
    /// Gets the street identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the identifier of the junction the street starts at.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Gets the identifier of the junction the street ends at.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns true if the street lies inside a junction.
    pub fn is_internal(&self) -> bool {
        self.internal
    }
}

impl RoadGraph {
    /// Creates an empty road graph.
    pub fn new(convention: NamingConvention) -> Self {
        Self {
            convention,
            ..Default::default()
        }
    }

    /// Creates a road graph from a network description and builds its adjacency.
    pub fn from_network(network: &NetworkDescription, convention: NamingConvention) -> Self {
        let mut graph = Self::new(convention);
        for junction in &network.junctions {
            graph.add_junction(&junction.id, Point2d::new(junction.x, junction.y));
        }
        for street in &network.streets {
            graph.add_street(&street.id, &street.from, &street.to);
        }
        let report = graph.build_adjacency();
        debug!(
            "Loaded {} junctions, {} of {} streets linked",
            graph.junctions.len(),
            report.accepted,
            graph.streets.len()
        );
        graph
    }

    /// Gets the identifier conventions of the network.
    pub fn convention(&self) -> &NamingConvention {
        &self.convention
    }

    /// Adds a junction to the network.
    /// If a junction with the same identifier exists, its position is replaced.
    pub fn add_junction(&mut self, id: &str, pos: Point2d) -> JunctionId {
        if let Some(&key) = self.index.get(id) {
            warn!("Duplicate junction {}, replacing its position", id);
            self.junctions[key].pos = pos;
            return key;
        }
        let key = self.junctions.insert(Junction {
            id: id.to_string(),
            pos,
        });
        self.index.insert(id.to_string(), key);
        key
    }

    /// Adds a street to the network.
    /// The street is not traversable until the adjacency is rebuilt.
    pub fn add_street(&mut self, id: &str, from: &str, to: &str) {
        self.streets.push(Street {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            internal: self.convention.is_internal(id),
        });
    }

    /// Rebuilds the adjacency from scratch.
    ///
    /// Every street whose endpoints are both known links its junctions in
    /// both directions. Streets referencing an unknown junction are logged
    /// and left out.
    pub fn build_adjacency(&mut self) -> BuildReport {
        self.adjacency.clear();
        let mut report = BuildReport::default();
        for street in &self.streets {
            let from = self.index.get(&street.from).copied();
            let to = self.index.get(&street.to).copied();
            let (Some(from), Some(to)) = (from, to) else {
                warn!(
                    "Dropping street {}: unknown junction in {} -> {}",
                    street.id, street.from, street.to
                );
                report.dropped += 1;
                continue;
            };
            link(&mut self.adjacency, from, to);
            link(&mut self.adjacency, to, from);
            report.accepted += 1;
        }
        report
    }

    /// Gets a junction by its identifier.
    pub fn junction(&self, id: &str) -> Option<&Junction> {
        self.index.get(id).map(|key| &self.junctions[*key])
    }

    /// Iterates over the junctions in the network.
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.junctions.values()
    }

    /// Iterates over the streets in the network, in insertion order.
    pub fn streets(&self) -> impl Iterator<Item = &Street> {
        self.streets.iter()
    }

    /// Gets the identifiers of the junctions adjacent to the given junction.
    /// Unknown or isolated junctions have no neighbours.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.junction_key(id)
            .map(|key| {
                self.neighbor_keys(key)
                    .iter()
                    .map(|n| self.junctions[*n].id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Finds the street which carries a route from one junction to the next.
    ///
    /// Internal streets are never returned. When no street matches the pair
    /// directly, both pairs are compared again in normalized form.
    pub fn find_edge_between(&self, from: &str, to: &str) -> Option<&str> {
        let conv = &self.convention;
        let mut candidates = self.streets.iter().filter(|s| !s.internal);
        candidates
            .clone()
            .find(|s| s.from == from && s.to == to)
            .or_else(|| {
                let (from, to) = (conv.normalize(from), conv.normalize(to));
                candidates.find(|s| conv.normalize(&s.from) == from && conv.normalize(&s.to) == to)
            })
            .map(|s| s.id.as_str())
    }

    /// Groups the junctions into sets which are mutually reachable.
    /// Each group lists junctions in insertion order; groups are ordered by their first junction.
    pub fn connected_components(&self) -> Vec<Vec<&str>> {
        let starts = self.junctions.keys().collect::<Vec<_>>();
        let mut groups = connected_components(&starts, |key| {
            self.neighbor_keys(*key).iter().copied().collect::<Vec<_>>()
        })
        .into_iter()
        .map(|set| {
            let mut keys = set.into_iter().collect::<Vec<_>>();
            keys.sort();
            keys
        })
        .collect::<Vec<_>>();
        groups.sort_by_key(|keys| keys[0]);
        groups
            .into_iter()
            .map(|keys| keys.into_iter().map(|k| self.junctions[k].id()).collect())
            .collect()
    }

    pub(crate) fn junction_key(&self, id: &str) -> Option<JunctionId> {
        self.index.get(id).copied()
    }

    pub(crate) fn junction_at(&self, key: JunctionId) -> &Junction {
        &self.junctions[key]
    }

    pub(crate) fn neighbor_keys(&self, key: JunctionId) -> &[JunctionId] {
        self.adjacency
            .get(key)
            .map(|n| n.as_slice())
            .unwrap_or_default()
    }
}

fn link(
    adjacency: &mut SecondaryMap<JunctionId, SmallVec<[JunctionId; 4]>>,
    from: JunctionId,
    to: JunctionId,
) {
    // `from` is a live key, so the entry always exists.
    if let Some(neighbors) = adjacency.entry(from).map(|e| e.or_default()) {
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }
}
