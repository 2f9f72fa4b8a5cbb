use std::sync::LazyLock;

use stopgraph::{Distance, StopGraph};

pub const fn km(km: u64) -> Distance {
    Distance::from_km(km)
}

//              10
//   Central ---------- Harbor ---7--- Lighthouse
//   |     \           /                   |
//   6      4-Market-3                     8
//   |           \                         |
//   University   9                     Airport
//   |     \      |                        |
//   2      5---Stadium ---------12--------+
//   |            |
//   Hospital --2-+
//
//   Depot --1-- Yard              Quarry
pub const CITY_ROUTES: [(&str, &str, Distance); 12] = [
    ("Central", "Market", km(4)),
    ("Market", "Harbor", km(3)),
    ("Central", "Harbor", km(10)),
    ("Central", "University", km(6)),
    ("University", "Stadium", km(5)),
    ("Market", "Stadium", km(9)),
    ("Harbor", "Lighthouse", km(7)),
    ("Stadium", "Airport", km(12)),
    ("Lighthouse", "Airport", km(8)),
    ("University", "Hospital", km(2)),
    ("Hospital", "Stadium", km(2)),
    ("Depot", "Yard", km(1)),
];

/// Stop without any route.
pub const ISOLATED_STOP: &str = "Quarry";

pub static CITY_GRAPH: LazyLock<StopGraph> = LazyLock::new(|| {
    let mut graph = StopGraph::from_routes(CITY_ROUTES).unwrap();
    graph.add_stop(ISOLATED_STOP);
    graph
});
