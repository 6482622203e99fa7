use std::str::FromStr;

use crate::cost::CostModel;
use crate::errors::{GridError, Result};
use crate::location::Location;
use crate::options::Connectivity;

/// Cell value marking a location that cannot be entered.
pub const IMPASSABLE: i32 = i32::MAX;

/// Orthogonal offsets first, then diagonals. Fixed order keeps expansion deterministic.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// What the A* driver needs from a map.
pub trait GridMap {
    fn contains(&self, loc: Location) -> bool;
    /// Append traversable neighbors of `loc` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>);
    /// Cost of moving from `from` to the adjacent `to`; `f32::INFINITY` if `to` cannot be entered.
    fn step_cost(&self, from: Location, to: Location) -> f32;
    /// Admissible estimate of the remaining cost from `from` to `goal`.
    fn estimate(&self, from: Location, goal: Location) -> f32;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Map2D {
    width: i32,
    height: i32,
    cells: Vec<i32>,
    start: Option<Location>,
    finish: Option<Location>,
    connectivity: Connectivity,
}

impl Map2D {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
            start: None,
            finish: None,
            connectivity: Connectivity::default(),
        })
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn connectivity(&self) -> Connectivity { self.connectivity }
    pub fn start(&self) -> Option<Location> { self.start }
    pub fn finish(&self) -> Option<Location> { self.finish }

    fn index(&self, loc: Location) -> Option<usize> {
        if self.contains(loc) {
            Some(loc.y as usize * self.width as usize + loc.x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, loc: Location) -> Option<i32> {
        self.index(loc).map(|i| self.cells[i])
    }

    pub fn set_cell(&mut self, loc: Location, value: i32) -> Result<()> {
        if value < 0 {
            return Err(GridError::InvalidCellValue { at: loc, value });
        }
        let i = self.index(loc).ok_or(GridError::OutOfBounds(loc))?;
        self.cells[i] = value;
        Ok(())
    }

    pub fn is_passable(&self, loc: Location) -> bool {
        matches!(self.cell(loc), Some(v) if v != IMPASSABLE)
    }

    pub fn set_start(&mut self, loc: Location) -> Result<()> {
        if !self.contains(loc) { return Err(GridError::OutOfBounds(loc)); }
        self.start = Some(loc);
        Ok(())
    }

    pub fn set_finish(&mut self, loc: Location) -> Result<()> {
        if !self.contains(loc) { return Err(GridError::OutOfBounds(loc)); }
        self.finish = Some(loc);
        Ok(())
    }

    fn cost_model(&self) -> CostModel { CostModel::new(self.connectivity) }
}

impl GridMap for Map2D {
    fn contains(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.y >= 0 && loc.x < self.width && loc.y < self.height
    }

    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        let diagonals: &[(i32, i32)] = match self.connectivity {
            Connectivity::Four => &[],
            Connectivity::Eight => &DIAGONAL,
        };
        for &(dx, dy) in ORTHOGONAL.iter().chain(diagonals) {
            if let Some(n) = loc.offset(dx, dy) {
                if self.is_passable(n) {
                    buf.push(n);
                }
            }
        }
    }

    fn step_cost(&self, from: Location, to: Location) -> f32 {
        match self.cell(to) {
            Some(value) if value != IMPASSABLE => self.cost_model().step_cost(from, to, value),
            _ => f32::INFINITY,
        }
    }

    fn estimate(&self, from: Location, goal: Location) -> f32 {
        self.cost_model().heuristic(from, goal)
    }
}

/// Parses the text grid format: `.` open, `#` wall, `1`-`9` extra cost, `S` start, `G` finish.
impl FromStr for Map2D {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().map(|l| l.trim_end()).collect();
        let end = rows.iter().rposition(|r| !r.is_empty()).map(|i| i + 1).unwrap_or(0);
        let rows = &rows[..end];
        if rows.is_empty() {
            return Err(GridError::Parse { line: 1, message: "empty map".into() });
        }
        let width = rows[0].chars().count();
        let mut map = Map2D::new(width as i32, rows.len() as i32)?;

        for (y, row) in rows.iter().enumerate() {
            let line = y + 1;
            if row.chars().count() != width {
                return Err(GridError::Parse {
                    line,
                    message: format!("expected {} columns, found {}", width, row.chars().count()),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let loc = Location::new(x as i32, y as i32);
                let value = match ch {
                    '.' => 0,
                    '#' => IMPASSABLE,
                    '1'..='9' => ch as i32 - '0' as i32,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut map.start } else { &mut map.finish };
                        if slot.is_some() {
                            return Err(GridError::Parse { line, message: format!("duplicate '{}' marker", ch) });
                        }
                        *slot = Some(loc);
                        0
                    }
                    other => {
                        return Err(GridError::Parse { line, message: format!("unexpected character '{}'", other) });
                    }
                };
                map.set_cell(loc, value)?;
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(map: &Map2D, loc: Location) -> Vec<Location> {
        let mut buf = Vec::new();
        map.neighbors(loc, &mut buf);
        buf
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(Map2D::new(0, 3), Err(GridError::InvalidDimensions { width: 0, height: 3 }));
        assert!(Map2D::new(2, -1).is_err());
    }

    #[test]
    fn set_cell_validates_bounds_and_value() {
        let mut map = Map2D::new(2, 2).unwrap();
        assert_eq!(map.set_cell(Location::new(2, 0), 1), Err(GridError::OutOfBounds(Location::new(2, 0))));
        assert!(matches!(map.set_cell(Location::new(0, 0), -1), Err(GridError::InvalidCellValue { .. })));
        map.set_cell(Location::new(1, 1), IMPASSABLE).unwrap();
        assert!(!map.is_passable(Location::new(1, 1)));
        assert!(map.is_passable(Location::new(0, 1)));
        assert!(!map.is_passable(Location::new(-1, 0)));
    }

    #[test]
    fn neighbors_respect_connectivity_bounds_and_walls() {
        let mut map = Map2D::new(3, 3).unwrap();
        map.set_cell(Location::new(1, 0), IMPASSABLE).unwrap();
        let center = Location::new(1, 1);
        let eight = neighbors_of(&map, center);
        assert_eq!(eight.len(), 7);
        assert!(!eight.contains(&Location::new(1, 0)));
        assert!(!eight.contains(&center));

        let four = neighbors_of(&map.clone().with_connectivity(Connectivity::Four), center);
        assert_eq!(four, vec![Location::new(2, 1), Location::new(1, 2), Location::new(0, 1)]);

        let corner = neighbors_of(&map, Location::new(0, 0));
        assert_eq!(corner, vec![Location::new(0, 1), Location::new(1, 1)]);
    }

    #[test]
    fn step_cost_adds_destination_cell_value() {
        let mut map = Map2D::new(3, 3).unwrap();
        map.set_cell(Location::new(1, 0), 4).unwrap();
        assert_eq!(map.step_cost(Location::new(0, 0), Location::new(1, 0)), 5.0);
        assert_eq!(map.step_cost(Location::new(1, 0), Location::new(2, 0)), 1.0);
    }

    #[test]
    fn step_cost_into_wall_or_off_map_is_infinite() {
        let mut map = Map2D::new(2, 2).unwrap();
        map.set_cell(Location::new(1, 1), IMPASSABLE).unwrap();
        assert_eq!(map.step_cost(Location::new(0, 0), Location::new(1, 1)), f32::INFINITY);
        assert_eq!(map.step_cost(Location::new(0, 0), Location::new(-1, 0)), f32::INFINITY);
        assert!(map.step_cost(Location::new(0, 0), Location::new(1, 0)).is_finite());
    }

    #[test]
    fn neighbors_at_i32_edge_do_not_overflow() {
        let map = Map2D::new(2, 2).unwrap();
        let mut buf = Vec::new();
        map.neighbors(Location::new(i32::MAX, i32::MIN), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn parses_text_grid() {
        let map: Map2D = "S.#\n.3.\n..G\n".parse().unwrap();
        assert_eq!((map.width(), map.height()), (3, 3));
        assert_eq!(map.start(), Some(Location::new(0, 0)));
        assert_eq!(map.finish(), Some(Location::new(2, 2)));
        assert_eq!(map.cell(Location::new(2, 0)), Some(IMPASSABLE));
        assert_eq!(map.cell(Location::new(1, 1)), Some(3));
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        match "...\n..\n".parse::<Map2D>() {
            Err(GridError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!("S.S".parse::<Map2D>(), Err(GridError::Parse { line: 1, .. })));
        assert!(matches!("..x".parse::<Map2D>(), Err(GridError::Parse { .. })));
        assert!(matches!("\n\n".parse::<Map2D>(), Err(GridError::Parse { .. })));
    }
}
