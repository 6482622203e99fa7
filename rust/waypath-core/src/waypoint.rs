use std::rc::Rc;

use crate::location::Location;

/// Read-only view of a search node as the frontier sees it.
pub trait SearchNode {
    fn location(&self) -> Location;
    /// Accumulated cost from the start (g).
    fn cost_so_far(&self) -> f32;
    /// Cost so far plus the estimate to the goal (f).
    fn total_cost(&self) -> f32;
}

/// A search node on the grid, linked to the waypoint it was reached from.
#[derive(Clone, Debug)]
pub struct Waypoint {
    location: Location,
    previous_cost: f32,
    remaining_cost: f32,
    previous: Option<Rc<Waypoint>>,
}

impl Waypoint {
    pub fn start(location: Location, remaining_cost: f32) -> Self {
        Self { location, previous_cost: 0.0, remaining_cost, previous: None }
    }

    pub fn new(location: Location, previous: Option<Rc<Waypoint>>, previous_cost: f32, remaining_cost: f32) -> Self {
        Self { location, previous_cost, remaining_cost, previous }
    }

    pub fn previous_cost(&self) -> f32 { self.previous_cost }
    pub fn remaining_cost(&self) -> f32 { self.remaining_cost }
    pub fn previous(&self) -> Option<&Rc<Waypoint>> { self.previous.as_ref() }

    /// Locations from the first waypoint of the chain up to and including this one.
    pub fn path(&self) -> Vec<Location> {
        let mut tiles = vec![self.location];
        let mut cur = self.previous.as_deref();
        while let Some(wp) = cur {
            tiles.push(wp.location);
            cur = wp.previous.as_deref();
        }
        tiles.reverse();
        tiles
    }
}

impl SearchNode for Waypoint {
    fn location(&self) -> Location { self.location }
    fn cost_so_far(&self) -> f32 { self.previous_cost }
    fn total_cost(&self) -> f32 { self.previous_cost + self.remaining_cost }
}
