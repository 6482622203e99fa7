use crate::location::Location;
use crate::options::Connectivity;

pub const ORTHOGONAL_STEP_COST: f32 = 1.0;
pub const DIAGONAL_STEP_COST: f32 = std::f32::consts::SQRT_2;

#[derive(Clone, Copy, Debug, Default)]
pub struct CostModel {
    pub connectivity: Connectivity,
}

impl CostModel {
    pub fn new(connectivity: Connectivity) -> Self {
        Self { connectivity }
    }

    /// Base cost of one move between adjacent cells, before the destination's cell value.
    pub fn movement_cost(&self, from: Location, to: Location) -> f32 {
        if from.x != to.x && from.y != to.y { DIAGONAL_STEP_COST } else { ORTHOGONAL_STEP_COST }
    }

    /// Cost of entering `to` from an adjacent `from` whose cell carries `cell_value` extra.
    pub fn step_cost(&self, from: Location, to: Location, cell_value: i32) -> f32 {
        self.movement_cost(from, to) + cell_value.max(0) as f32
    }

    pub fn heuristic(&self, current: Location, goal: Location) -> f32 {
        match self.connectivity {
            Connectivity::Four => current.manhattan(goal) as f32,
            Connectivity::Eight => octile(current, goal),
        }
    }
}

pub fn octile(a: Location, b: Location) -> f32 {
    let dx = a.x.abs_diff(b.x) as f32;
    let dy = a.y.abs_diff(b.y) as f32;
    let dmin = if dx < dy { dx } else { dy };
    let dmax = if dx > dy { dx } else { dy };
    dmin * DIAGONAL_STEP_COST + (dmax - dmin)
}
