//! Text map loader.
//!
//! # Format
//!
//! One line per row:
//!
//! | Text      | Meaning                                                  |
//! |-----------|----------------------------------------------------------|
//! | `#`       | wall                                                     |
//! | `.`       | food                                                     |
//! | `G`       | chaser spawn                                             |
//! | `P<c>`    | seeker spawn for team `<c>`                              |
//! | `F<c>`    | flag for team `<c>`                                      |
//! | other     | empty floor                                              |
//!
//! `<c>` is one alphanumeric character.  A `P<c>`/`F<c>` token spans two
//! text columns but occupies a single grid cell, so the cell's x coordinate
//! is its position in the parsed row, not its text column.  Seeker `P<c>`
//! plays for flag `F<c>`.
//!
//! Blank lines are skipped and short rows are padded with floor to the
//! widest row.
//!
//! ```text
//! P1 .
//! .#F1
//! G .
//! ```

use std::path::Path;

use gp_core::{Cell, FlagId};
use tracing::{debug, trace};

use crate::{Grid, GridBuilder, GridError, GridResult};

/// Load and parse a map file.
pub fn load_map_file(path: &Path) -> GridResult<Grid> {
    debug!(path = %path.display(), "loading map");
    let text = std::fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse map text into a [`Grid`].
pub fn parse_map(text: &str) -> GridResult<Grid> {
    let rows: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(GridError::Empty);
    }

    let mut parsed = Vec::with_capacity(rows.len());
    for (y, line) in rows.iter().enumerate() {
        parsed.push(parse_row(line, y as i32));
    }

    let width = parsed.iter().map(|r| r.len).max().unwrap_or(0) as i32;
    let height = parsed.len() as i32;
    let mut builder = GridBuilder::new(width, height);

    for row in parsed {
        for cell in row.walls {
            builder = builder.wall(cell);
        }
        for cell in row.food {
            builder = builder.food(cell);
        }
        for cell in row.chasers {
            builder = builder.chaser(cell);
        }
        for (cell, label) in row.seekers {
            builder = builder.seeker(cell, FlagId::for_label(label));
        }
        for (cell, label) in row.flags {
            builder = builder.flag(cell, FlagId::for_label(label));
        }
    }

    let grid = builder.build()?;
    debug!(
        width,
        height,
        seekers = grid.seeker_spawns().len(),
        food = grid.food_count(),
        "map parsed"
    );
    Ok(grid)
}

// ── Row parsing ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct ParsedRow {
    len:     usize,
    walls:   Vec<Cell>,
    food:    Vec<Cell>,
    chasers: Vec<Cell>,
    seekers: Vec<(Cell, char)>,
    flags:   Vec<(Cell, char)>,
}

fn parse_row(line: &str, y: i32) -> ParsedRow {
    let chars: Vec<char> = line.chars().collect();
    let mut row = ParsedRow::default();
    let mut i = 0;

    while i < chars.len() {
        let cell = Cell::new(row.len as i32, y);
        let c = chars[i];

        match (c, chars.get(i + 1)) {
            ('P', Some(&label)) if label.is_ascii_alphanumeric() => {
                trace!(%cell, %label, "seeker spawn token");
                row.seekers.push((cell, label));
                i += 2;
            }
            ('F', Some(&label)) if label.is_ascii_alphanumeric() => {
                trace!(%cell, %label, "flag token");
                row.flags.push((cell, label));
                i += 2;
            }
            _ => {
                match c {
                    '#' => row.walls.push(cell),
                    '.' => row.food.push(cell),
                    'G' => row.chasers.push(cell),
                    _ => {}
                }
                i += 1;
            }
        }
        row.len += 1;
    }

    row
}
