mod network;

pub use network::{CITY_GRAPH, CITY_ROUTES, ISOLATED_STOP, km};
