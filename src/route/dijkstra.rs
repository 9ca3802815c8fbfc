use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use slotmap::SecondaryMap;

use crate::debug::{debug_line, debug_point};
use crate::graph::RoadGraph;
use crate::math::distance;
use crate::JunctionId;

/// The search state of a single junction.
#[derive(Clone, Copy, Debug)]
struct Scratch {
    /// The tentative distance from the start junction.
    dist: f64,
    /// The junction this one was reached from.
    prev: Option<JunctionId>,
}

/// An entry in the priority queue.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    /// The tentative distance when the entry was pushed.
    dist: f64,
    /// The push order, used to settle ties in favour of the earliest entry.
    seq: usize,
    /// The junction.
    key: JunctionId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap yields the nearest, then oldest, entry.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Finds the shortest path between two junctions, weighting each hop by
/// the straight-line distance between its junctions.
///
/// Returns the junctions along the path, including both ends, and its
/// length, or `None` if the end is unreachable. All search state is local
/// to the call, so concurrent searches over one graph don't interfere.
pub(crate) fn shortest_path(
    graph: &RoadGraph,
    start: JunctionId,
    end: JunctionId,
) -> Option<(Vec<JunctionId>, f64)> {
    let mut scratch = SecondaryMap::<JunctionId, Scratch>::new();
    let mut queue = BinaryHeap::new();
    let mut seq = 0;

    scratch.insert(
        start,
        Scratch {
            dist: 0.0,
            prev: None,
        },
    );
    queue.push(QueueEntry {
        dist: 0.0,
        seq,
        key: start,
    });

    let mut settled = 0;
    while let Some(QueueEntry { dist, key, .. }) = queue.pop() {
        if scratch.get(key).is_some_and(|s| dist > s.dist) {
            // Stale entry
            continue;
        }
        settled += 1;
        let pos = graph.junction_at(key).pos();
        debug_point("settle", pos, dist);
        if key == end {
            break;
        }

        for &next in graph.neighbor_keys(key) {
            let next_pos = graph.junction_at(next).pos();
            let cand = dist + distance(pos, next_pos);
            // Unvisited junctions have no entry, so even an infinite candidate counts.
            if scratch.get(next).map_or(true, |s| cand < s.dist) {
                trace!("Relaxing {:?} -> {:?} to {:.2}", key, next, cand);
                debug_line("relax", pos, next_pos);
                scratch.insert(
                    next,
                    Scratch {
                        dist: cand,
                        prev: Some(key),
                    },
                );
                seq += 1;
                queue.push(QueueEntry {
                    dist: cand,
                    seq,
                    key: next,
                });
            }
        }
    }

    let Some(total) = scratch.get(end).map(|s| s.dist) else {
        debug!("Search settled {} junctions without reaching the end", settled);
        return None;
    };

    let mut path = vec![end];
    let mut cur = end;
    while let Some(prev) = scratch.get(cur).and_then(|s| s.prev) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    debug!(
        "Search settled {} junctions, path of {} junctions spanning {:.2}",
        settled,
        path.len(),
        total
    );
    (path[0] == start).then_some((path, total))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point2d;
    use assert_approx_eq::assert_approx_eq;

    fn square() -> (RoadGraph, [JunctionId; 4]) {
        let mut graph = RoadGraph::default();
        let a = graph.add_junction("A", Point2d::new(0.0, 0.0));
        let b = graph.add_junction("B", Point2d::new(10.0, 0.0));
        let c = graph.add_junction("C", Point2d::new(10.0, 10.0));
        let d = graph.add_junction("D", Point2d::new(0.0, 30.0));
        graph.add_street("ab", "A", "B");
        graph.add_street("bc", "B", "C");
        graph.add_street("ad", "A", "D");
        graph.add_street("dc", "D", "C");
        graph.build_adjacency();
        (graph, [a, b, c, d])
    }

    #[test]
    fn picks_shorter_side() {
        let (graph, [a, b, c, _]) = square();
        let (path, dist) = shortest_path(&graph, a, c).unwrap();
        assert_eq!(path, vec![a, b, c]);
        assert_approx_eq!(dist, 20.0);
    }

    #[test]
    fn traverses_streets_backwards() {
        let (graph, [a, b, c, _]) = square();
        let (path, _) = shortest_path(&graph, c, a).unwrap();
        assert_eq!(path, vec![c, b, a]);
    }

    #[test]
    fn start_is_end() {
        let (graph, [a, ..]) = square();
        let (path, dist) = shortest_path(&graph, a, a).unwrap();
        assert_eq!(path, vec![a]);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn unreachable() {
        let (mut graph, [a, ..]) = square();
        let e = graph.add_junction("E", Point2d::new(100.0, 100.0));
        graph.build_adjacency();
        assert!(shortest_path(&graph, a, e).is_none());
        assert!(shortest_path(&graph, e, a).is_none());
    }

    #[test]
    fn overflowing_distance_is_still_reachable() {
        let mut graph = RoadGraph::default();
        let a = graph.add_junction("A", Point2d::new(-1e308, 0.0));
        let b = graph.add_junction("B", Point2d::new(1e308, 0.0));
        graph.add_street("ab", "A", "B");
        graph.build_adjacency();
        let (path, dist) = shortest_path(&graph, a, b).unwrap();
        assert_eq!(path, vec![a, b]);
        assert!(dist.is_infinite());
    }

    #[test]
    fn queue_prefers_older_entries_on_ties() {
        let mut graph = RoadGraph::default();
        let key = graph.add_junction("A", Point2d::new(0.0, 0.0));
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry {
            dist: 5.0,
            seq: 2,
            key,
        });
        heap.push(QueueEntry {
            dist: 5.0,
            seq: 1,
            key,
        });
        heap.push(QueueEntry {
            dist: 1.0,
            seq: 3,
            key,
        });
        assert_eq!(heap.pop().map(|e| e.seq), Some(3));
        assert_eq!(heap.pop().map(|e| e.seq), Some(1));
        assert_eq!(heap.pop().map(|e| e.seq), Some(2));
    }
}
