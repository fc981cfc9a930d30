//! Grid coordinates and movement vectors.
//!
//! Coordinates are signed so that `cell.offset(delta)` may step outside the
//! map; the grid rejects such cells in `is_valid` instead of the caller
//! having to guard every subtraction.

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid cell, 0-indexed with the origin at the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by applying `delta` once.
    #[inline]
    pub fn offset(self, delta: Delta) -> Cell {
        Cell::new(self.x + delta.dx, self.y + delta.dy)
    }

    /// The adjacent cell in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        self.offset(dir.delta())
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The delta that moves `self` onto `other`.
    #[inline]
    pub fn delta_to(self, other: Cell) -> Delta {
        Delta::new(other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

// ── Delta ─────────────────────────────────────────────────────────────────────

/// A movement vector.  [`Delta::ZERO`] means "stay put".
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Delta::ZERO
    }

    /// Multiply both components by `factor` (speed multipliers).
    #[inline]
    pub fn scaled(self, factor: i32) -> Delta {
        Delta::new(self.dx * factor, self.dy * factor)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four grid moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All moves in the fixed evaluation order used everywhere in the engine:
    /// up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub fn delta(self) -> Delta {
        match self {
            Direction::Up    => Delta::new(0, -1),
            Direction::Right => Delta::new(1, 0),
            Direction::Down  => Delta::new(0, 1),
            Direction::Left  => Delta::new(-1, 0),
        }
    }

    /// Inverse of [`delta`][Self::delta]; `None` for anything that is not a
    /// single orthogonal step.
    pub fn from_delta(delta: Delta) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
