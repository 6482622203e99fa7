pub mod cost;
pub mod errors;
pub mod frontier;
pub mod location;
pub mod map;
pub mod models;
pub mod options;
pub mod pathfinder;
pub mod waypoint;

pub use errors::{GridError, Result};
pub use frontier::{CloseOutcome, Relaxation, SearchFrontier};
pub use location::Location;
pub use map::{GridMap, Map2D, IMPASSABLE};
pub use models::PathResult;
pub use options::{Connectivity, SearchOptions};
pub use pathfinder::AStar;
pub use waypoint::{SearchNode, Waypoint};

pub fn version() -> &'static str { env!("CARGO_PKG_VERSION") }
