use std::cmp::Reverse;

use radix_heap::RadixHeapMap;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{Distance, StopGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Stops farther than this distance from the origin are considered unreachable.
    pub max_distance: Distance,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            max_distance: Distance::MAX,
        }
    }
}

/// Gets the minimum total distance from the origin to the destination.
/// Returns None if either stop doesn't belong to the graph or if the destination cannot be
/// reached within the configured max distance.
pub fn shortest_distance(
    config: &ShortestPathConfig,
    graph: &StopGraph,
    origin: &str,
    destination: &str,
) -> Option<Distance> {
    debug!("Computing shortest distance {origin:?} -> {destination:?} with {config:?}");

    if !graph.contains_stop(destination) {
        return None;
    }

    let distances = dijkstra(config, graph, origin, Some(destination));
    distances.get(destination).copied()
}

/// Returns true only if the destination can be reached from the origin.
pub fn has_path(
    config: &ShortestPathConfig,
    graph: &StopGraph,
    origin: &str,
    destination: &str,
) -> bool {
    shortest_distance(config, graph, origin, destination).is_some()
}

/// Gets the minimum total distance from the origin to every stop that can be reached from it,
/// the origin included. Returns an empty table if the origin doesn't belong to the graph.
pub fn shortest_distances<'g>(
    config: &ShortestPathConfig,
    graph: &'g StopGraph,
    origin: &str,
) -> FxHashMap<&'g str, Distance> {
    debug!("Computing shortest distances from {origin:?} with {config:?}");
    dijkstra(config, graph, origin, None)
}

/// Settles stops in order of increasing distance from the origin, stopping early once the
/// destination (if any) is settled. Only settled stops are returned, with their final distance.
///
/// Stops at the same distance are settled in heap order, which follows the order they were
/// relaxed in. The tie-break never changes the returned distances.
fn dijkstra<'g>(
    config: &ShortestPathConfig,
    graph: &'g StopGraph,
    origin: &str,
    destination: Option<&str>,
) -> FxHashMap<&'g str, Distance> {
    let mut settled: FxHashMap<&'g str, Distance> = FxHashMap::default();

    let Some(origin) = graph.stop_name(origin) else {
        return settled;
    };

    // (current) shortest distance from origin to this stop
    let mut tentative = FxHashMap::from_iter([(origin, Distance::ZERO)]);

    // keys are reversed since the radix heap pops the largest key first
    let mut heap = RadixHeapMap::from_iter([(Reverse(Distance::ZERO.km()), origin)]);

    while let Some((Reverse(km), stop)) = heap.pop() {
        if settled.contains_key(stop) {
            // stale entry, a shorter distance was already settled
            continue;
        }

        let distance = Distance::from_km(km);
        settled.insert(stop, distance);

        if destination == Some(stop) {
            break;
        }

        for (neighbor, route_distance) in graph.neighbors(stop).into_iter().flatten() {
            if settled.contains_key(neighbor) {
                continue;
            }

            let candidate = distance.saturating_add(route_distance);

            if candidate > config.max_distance {
                continue;
            }

            // check if we can follow the current route to reach the neighbor in a cheaper way
            if tentative.get(neighbor).is_none_or(|&best| candidate < best) {
                trace!("Relaxing {neighbor:?} to {candidate} via {stop:?}");
                tentative.insert(neighbor, candidate);
                heap.push(Reverse(candidate.km()), neighbor);
            }
        }
    }

    settled
}
