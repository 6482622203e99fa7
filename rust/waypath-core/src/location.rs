use serde::{Deserialize, Serialize};

/// A cell coordinate on a 2D grid. Used as the key of the open and closed sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const ORIGIN: Location = Location { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Packs both coordinates into one 64-bit key; distinct locations never share a key.
    pub fn key(&self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    /// `None` when the shifted location would leave the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Location> {
        Some(Location { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }

    pub fn manhattan(&self, other: Location) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    pub fn chebyshev(&self, other: Location) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Location { fn from(p: (i32, i32)) -> Self { Location::new(p.0, p.1) } }
impl From<Location> for (i32, i32) { fn from(l: Location) -> Self { (l.x, l.y) } }

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
