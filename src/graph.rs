use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::routing::{self, ShortestPathConfig};
use crate::{Distance, GraphError};

pub mod display;

/// A stop record: the other stops it is directly connected to and the route distances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Stop {
    neighbors: FxHashMap<String, Distance>,
}

/// Undirected, weighted, simple graph of named transit stops.
///
/// A stop is identified by its name. Every route is recorded on both of its endpoints with the
/// same distance, and removing a stop removes every route that touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopGraph {
    stops: FxHashMap<String, Stop>,
}

impl StopGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph out of a list of routes, creating the endpoint stops as needed.
    pub fn from_routes<'a>(
        routes: impl IntoIterator<Item = (&'a str, &'a str, Distance)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for (a, b, distance) in routes {
            graph.add_route(a, b, distance)?;
        }
        Ok(graph)
    }

    /// Gets the number of stops in the graph.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn contains_stop(&self, name: &str) -> bool {
        self.stops.contains_key(name)
    }

    /// Adds a stop with no routes.
    /// Adding a stop that already exists leaves it and its routes untouched and returns false.
    pub fn add_stop(&mut self, name: &str) -> bool {
        if self.contains_stop(name) {
            debug!("Stop {name:?} already exists");
            return false;
        }

        debug!("Adding stop {name:?}");
        self.stops.insert(name.to_owned(), Stop::default());
        true
    }

    /// Removes the stop together with all the routes connected to it.
    /// Returns false if the stop doesn't belong to the graph.
    pub fn remove_stop(&mut self, name: &str) -> bool {
        let Some(stop) = self.stops.remove(name) else {
            return false;
        };

        debug!("Removing stop {name:?} and {} routes", stop.neighbors.len());
        for neighbor in stop.neighbors.keys() {
            if let Some(other) = self.stops.get_mut(neighbor.as_str()) {
                other.neighbors.remove(name);
            }
        }

        true
    }

    /// Gets the number of routes, each undirected route counted once.
    pub fn route_count(&self) -> usize {
        let records: usize = self.stops.values().map(|s| s.neighbors.len()).sum();
        records / 2
    }

    /// Returns true only if the first stop exists and has a route to the second stop.
    pub fn contains_route(&self, a: &str, b: &str) -> bool {
        self.stops
            .get(a)
            .is_some_and(|stop| stop.neighbors.contains_key(b))
    }

    /// Gets the distance of the route between the two stops, if any.
    pub fn route_distance(&self, a: &str, b: &str) -> Option<Distance> {
        self.stops.get(a)?.neighbors.get(b).copied()
    }

    /// Adds the route between two distinct stops, or overwrites the distance of an existing one.
    /// Endpoints that don't belong to the graph yet are added.
    /// Returns the distance the route had before, if it already existed.
    pub fn add_route(
        &mut self,
        a: &str,
        b: &str,
        distance: Distance,
    ) -> Result<Option<Distance>, GraphError> {
        if a == b {
            warn!("Rejecting route from {a:?} to itself");
            return Err(GraphError::SelfRoute(a.to_owned()));
        }

        debug!("Adding route {a:?} <-> {b:?} of {distance}");
        let previous = self.stop_mut_or_insert(a).neighbors.insert(b.to_owned(), distance);
        self.stop_mut_or_insert(b).neighbors.insert(a.to_owned(), distance);

        Ok(previous)
    }

    /// Removes the route between the two stops and returns its distance.
    /// Missing stops are never created.
    pub fn remove_route(&mut self, a: &str, b: &str) -> Option<Distance> {
        let distance = self.stops.get_mut(a)?.neighbors.remove(b)?;

        debug!("Removing route {a:?} <-> {b:?} of {distance}");
        if let Some(stop) = self.stops.get_mut(b) {
            stop.neighbors.remove(a);
        }

        Some(distance)
    }

    /// Gets an iterator over the names of all the stops, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.stops.keys().map(String::as_str)
    }

    /// Gets an iterator over the stops directly connected to the given one, together with the
    /// route distances. Returns None if the stop doesn't belong to the graph.
    pub fn neighbors<'a>(
        &'a self,
        name: &str,
    ) -> Option<impl Iterator<Item = (&'a str, Distance)> + use<'a>> {
        self.stops
            .get(name)
            .map(|stop| stop.neighbors.iter().map(|(n, &d)| (n.as_str(), d)))
    }

    /// Gets the name of the stop as owned by the graph.
    pub(crate) fn stop_name(&self, name: &str) -> Option<&str> {
        self.stops.get_key_value(name).map(|(n, _)| n.as_str())
    }

    /// Gets the minimum total distance from the origin to the destination.
    /// Returns None if either stop is unknown or no route connects them.
    pub fn shortest_distance(&self, origin: &str, destination: &str) -> Option<Distance> {
        routing::shortest_distance(&ShortestPathConfig::default(), self, origin, destination)
    }

    /// Returns true only if the destination can be reached from the origin.
    pub fn has_path(&self, origin: &str, destination: &str) -> bool {
        routing::has_path(&ShortestPathConfig::default(), self, origin, destination)
    }

    fn stop_mut_or_insert(&mut self, name: &str) -> &mut Stop {
        self.stops.entry(name.to_owned()).or_insert_with(|| {
            debug!("Adding stop {name:?} as route endpoint");
            Stop::default()
        })
    }
}
