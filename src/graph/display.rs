use std::fmt;

use crate::StopGraph;

/// Renders the adjacency map: every stop followed by its routes, sorted by name.
impl fmt::Display for StopGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in sorted_stops(self) {
            writeln!(f, "{stop} =>")?;

            let mut neighbors: Vec<_> = self.neighbors(stop).into_iter().flatten().collect();
            neighbors.sort_unstable();

            for (neighbor, distance) in neighbors {
                writeln!(f, "\t{neighbor}\t{distance}")?;
            }
        }

        Ok(())
    }
}

/// Numbered listing of the stops of a graph, sorted by name.
#[derive(Debug, Clone, Copy)]
pub struct StopList<'a> {
    graph: &'a StopGraph,
}

impl StopGraph {
    pub fn stop_list(&self) -> StopList<'_> {
        StopList { graph: self }
    }
}

impl fmt::Display for StopList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, stop) in sorted_stops(self.graph).into_iter().enumerate() {
            writeln!(f, "{}. {stop}", index + 1)?;
        }

        Ok(())
    }
}

fn sorted_stops(graph: &StopGraph) -> Vec<&str> {
    let mut stops: Vec<_> = graph.stops().collect();
    stops.sort_unstable();
    stops
}
