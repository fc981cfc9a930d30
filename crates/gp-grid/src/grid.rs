//! The static map and its food set.
//!
//! # Data layout
//!
//! Walls and food are dense row-major `Vec<bool>` bitmaps indexed by
//! `y * width + x`.  Validity checks and food pickup are O(1), and iterating
//! the food bitmap yields cells in the order the map text listed them, which
//! is the order goal selection breaks ties in.
//!
//! Everything except the food set is fixed once the grid is built.  The
//! simulation is the only caller of [`Grid::consume_food`]; agents read the
//! food set through `&Grid`.

use gp_core::{Cell, Direction, FlagId};
use tracing::trace;

use crate::{GridError, GridResult};

// ── Spawn and flag records ────────────────────────────────────────────────────

/// A team's goal cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flag {
    pub cell: Cell,
    pub id:   FlagId,
}

/// Where a seeker starts, and which flag it plays for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekerSpawn {
    pub cell: Cell,
    pub flag: FlagId,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Walled grid with food, flags, and spawn points.
///
/// Do not construct directly; use [`GridBuilder`] or [`parse_map`][crate::parse_map].
#[derive(Clone, Debug)]
pub struct Grid {
    width:         i32,
    height:        i32,
    walls:         Vec<bool>,
    food:          Vec<bool>,
    food_count:    usize,
    flags:         Vec<Flag>,
    seeker_spawns: Vec<SeekerSpawn>,
    chaser_spawns: Vec<Cell>,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Row-major index of `cell`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        let in_bounds = (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y);
        in_bounds.then(|| (cell.y * self.width + cell.x) as usize)
    }

    /// Inverse of [`index_of`][Self::index_of].
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    // ── Traversability ────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// `true` for walls only; out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.walls[i])
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| !self.walls[i])
    }

    /// Valid orthogonal neighbours in up, right, down, left order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.legal_directions(cell).map(move |d| cell.step(d))
    }

    /// Directions from `cell` that lead to a valid cell, in up, right, down,
    /// left order.
    pub fn legal_directions(&self, cell: Cell) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.is_valid(cell.step(d)))
    }

    // ── Food ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn has_food(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|i| self.food[i])
    }

    #[inline]
    pub fn food_count(&self) -> usize {
        self.food_count
    }

    /// Remaining food, in row-major (map text) order.
    pub fn food_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.food
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(i, _)| self.cell_at(i))
    }

    /// Remove the food at `cell`.  Returns `true` if there was food to eat;
    /// a second call on the same cell is a no-op returning `false`.
    pub fn consume_food(&mut self, cell: Cell) -> bool {
        match self.index_of(cell) {
            Some(i) if self.food[i] => {
                self.food[i] = false;
                self.food_count -= 1;
                trace!(%cell, remaining = self.food_count, "food consumed");
                true
            }
            _ => false,
        }
    }

    // ── Flags and spawns ──────────────────────────────────────────────────

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// `true` if any team's flag is at `cell`.
    pub fn is_flag(&self, cell: Cell) -> bool {
        self.flags.iter().any(|f| f.cell == cell)
    }

    /// `true` if `cell` holds the flag `id`.
    pub fn is_goal(&self, cell: Cell, id: &FlagId) -> bool {
        self.flags.iter().any(|f| f.cell == cell && &f.id == id)
    }

    /// The cell of flag `id`.
    ///
    /// An unknown id means the load-time pairing check was bypassed; callers
    /// treat the error as fatal.
    pub fn flag_cell(&self, id: &FlagId) -> GridResult<Cell> {
        self.flags
            .iter()
            .find(|f| &f.id == id)
            .map(|f| f.cell)
            .ok_or_else(|| GridError::UnknownFlag(id.clone()))
    }

    pub fn seeker_spawns(&self) -> &[SeekerSpawn] {
        &self.seeker_spawns
    }

    pub fn chaser_spawns(&self) -> &[Cell] {
        &self.chaser_spawns
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Incremental grid builder.  [`build`][Self::build] checks the one-seeker,
/// one-flag, one-chaser-per-team invariant.
///
/// ```rust,ignore
/// let grid = GridBuilder::new(3, 1)
///     .seeker(Cell::new(0, 0), "F1".into())
///     .chaser(Cell::new(1, 0))
///     .flag(Cell::new(2, 0), "F1".into())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GridBuilder {
    width:         i32,
    height:        i32,
    walls:         Vec<Cell>,
    food:          Vec<Cell>,
    flags:         Vec<Flag>,
    seeker_spawns: Vec<SeekerSpawn>,
    chaser_spawns: Vec<Cell>,
}

impl GridBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        GridBuilder {
            width:         width.max(0),
            height:        height.max(0),
            walls:         Vec::new(),
            food:          Vec::new(),
            flags:         Vec::new(),
            seeker_spawns: Vec::new(),
            chaser_spawns: Vec::new(),
        }
    }

    pub fn wall(mut self, cell: Cell) -> Self {
        self.walls.push(cell);
        self
    }

    pub fn food(mut self, cell: Cell) -> Self {
        self.food.push(cell);
        self
    }

    pub fn flag(mut self, cell: Cell, id: FlagId) -> Self {
        self.flags.push(Flag { cell, id });
        self
    }

    pub fn seeker(mut self, cell: Cell, flag: FlagId) -> Self {
        self.seeker_spawns.push(SeekerSpawn { cell, flag });
        self
    }

    pub fn chaser(mut self, cell: Cell) -> Self {
        self.chaser_spawns.push(cell);
        self
    }

    /// Validate and produce the grid.
    pub fn build(self) -> GridResult<Grid> {
        let (seekers, flags, chasers) =
            (self.seeker_spawns.len(), self.flags.len(), self.chaser_spawns.len());
        if seekers != flags || flags != chasers {
            return Err(GridError::CountMismatch { seekers, flags, chasers });
        }

        let size = (self.width * self.height) as usize;
        let mut grid = Grid {
            width:         self.width,
            height:        self.height,
            walls:         vec![false; size],
            food:          vec![false; size],
            food_count:    0,
            flags:         Vec::with_capacity(flags),
            seeker_spawns: Vec::with_capacity(seekers),
            chaser_spawns: Vec::with_capacity(chasers),
        };

        for cell in self.walls {
            let i = grid.checked_index("wall", cell)?;
            grid.walls[i] = true;
        }
        for cell in self.food {
            let i = grid.checked_index("food", cell)?;
            if !grid.food[i] {
                grid.food[i] = true;
                grid.food_count += 1;
            }
        }

        for flag in self.flags {
            grid.checked_index("flag", flag.cell)?;
            if grid.flags.iter().any(|f| f.id == flag.id) {
                return Err(GridError::DuplicateToken { token: flag.id.0, cell: flag.cell });
            }
            grid.flags.push(flag);
        }

        for spawn in self.seeker_spawns {
            grid.checked_index("seeker spawn", spawn.cell)?;
            if grid.seeker_spawns.iter().any(|s| s.flag == spawn.flag) {
                let token = spawn.flag.0.replacen('F', "P", 1);
                return Err(GridError::DuplicateToken { token, cell: spawn.cell });
            }
            grid.flag_cell(&spawn.flag)?;
            grid.seeker_spawns.push(spawn);
        }

        for cell in self.chaser_spawns {
            grid.checked_index("chaser spawn", cell)?;
            grid.chaser_spawns.push(cell);
        }

        Ok(grid)
    }
}

impl Grid {
    fn checked_index(&self, what: &'static str, cell: Cell) -> GridResult<usize> {
        self.index_of(cell).ok_or(GridError::OutOfBounds {
            what,
            cell,
            width:  self.width,
            height: self.height,
        })
    }
}
