use std::rc::Rc;

use tracing::debug;

use crate::errors::{GridError, Result};
use crate::frontier::{CloseOutcome, SearchFrontier};
use crate::location::Location;
use crate::map::GridMap;
use crate::models::{PathResult, REASON_EXPANSION_LIMIT, REASON_NO_PATH};
use crate::options::{Connectivity, SearchOptions};
use crate::waypoint::{SearchNode, Waypoint};

pub struct AStar<'a, M: GridMap> {
    map: &'a M,
}

impl<'a, M: GridMap> AStar<'a, M> {
    pub fn new(map: &'a M) -> Self { Self { map } }

    /// `Connectivity::Four` restricts the search to orthogonal moves even when the
    /// map offers diagonals. At most `options.max_expansions` locations are closed.
    pub fn find_path(&self, start: Location, goal: Location, options: &SearchOptions) -> Result<PathResult> {
        for loc in [start, goal] {
            if !self.map.contains(loc) {
                return Err(GridError::OutOfBounds(loc));
            }
        }
        if start == goal {
            return Ok(PathResult::found(vec![start], 0, 0.0));
        }

        let mut state: SearchFrontier<M, Waypoint> = SearchFrontier::new(self.map);
        let mut expanded: u64 = 0;
        let mut nbuf: Vec<Location> = Vec::new();

        let _ = state.add_or_relax(Waypoint::start(start, self.map.estimate(start, goal)));

        while let Some(best) = state.min_open() {
            if expanded >= options.max_expansions {
                debug!(%start, %goal, expanded, "expansion limit reached");
                return Ok(PathResult::not_found(REASON_EXPANSION_LIMIT, expanded));
            }
            let current = Rc::new(best.clone());
            let loc = current.location();
            if state.close(loc) != CloseOutcome::Closed {
                break;
            }
            expanded += 1;

            if loc == goal {
                debug!(%start, %goal, expanded, cost = current.cost_so_far(), "path found");
                return Ok(PathResult::found(current.path(), expanded, current.cost_so_far()));
            }

            nbuf.clear();
            self.map.neighbors(loc, &mut nbuf);
            for &next in &nbuf {
                if state.is_closed(next) {
                    continue;
                }
                if options.connectivity == Connectivity::Four && next.x != loc.x && next.y != loc.y {
                    continue;
                }
                let g = current.cost_so_far() + self.map.step_cost(loc, next);
                let h = self.map.estimate(next, goal);
                let _ = state.add_or_relax(Waypoint::new(next, Some(Rc::clone(&current)), g, h));
            }
        }

        debug!(%start, %goal, expanded, "open set exhausted");
        Ok(PathResult::not_found(REASON_NO_PATH, expanded))
    }
}
