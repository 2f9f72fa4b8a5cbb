#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::GraphError;
pub use graph::StopGraph;
pub use graph::display::StopList;
pub use model::Distance;
pub use routing::{ShortestPathConfig, has_path, shortest_distance, shortest_distances};
