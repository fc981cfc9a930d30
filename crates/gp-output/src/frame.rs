//! Plain-text frames for terminals and logs.
//!
//! | Glyph | Meaning                     |
//! |-------|-----------------------------|
//! | `#`   | wall                        |
//! | `.`   | food                        |
//! | `F`   | flag                        |
//! | `P`/`p` | seeker / protected seeker |
//! | `G`/`g` | chaser / protected chaser |
//!
//! When several things share a cell, seekers draw over chasers and chasers
//! over flags and food.

use gp_core::Cell;
use gp_grid::Grid;
use gp_sim::Snapshot;

/// Render the map with agents from `snapshot`, one line per grid row.
pub fn render_frame(grid: &Grid, snapshot: &Snapshot) -> String {
    let width = grid.width().max(0) as usize;
    let mut rows: Vec<Vec<char>> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| base_glyph(grid, Cell::new(x, y)))
                .collect()
        })
        .collect();

    let mut put = |cell: Cell, glyph: char| {
        if grid.in_bounds(cell) {
            rows[cell.y as usize][cell.x as usize] = glyph;
        }
    };
    for chaser in &snapshot.chasers {
        put(chaser.cell, if chaser.protected { 'g' } else { 'G' });
    }
    for seeker in &snapshot.seekers {
        put(seeker.cell, if seeker.protected { 'p' } else { 'P' });
    }

    let mut out = String::with_capacity(rows.len() * (width + 1));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.iter());
    }
    out
}

fn base_glyph(grid: &Grid, cell: Cell) -> char {
    if grid.is_wall(cell) {
        '#'
    } else if grid.is_flag(cell) {
        'F'
    } else if grid.has_food(cell) {
        '.'
    } else {
        ' '
    }
}

/// Score panel: one header line, one line per team, and the result line
/// once the game is over.
pub fn status_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(snapshot.seekers.len() + 2);
    lines.push(format!(
        "{}  food left {}  {}",
        snapshot.tick, snapshot.food_remaining, snapshot.outcome
    ));

    for s in &snapshot.seekers {
        let color = if s.protected { s.color.dimmed() } else { s.color };
        let high = snapshot.high_scores.get(&s.team).copied().unwrap_or(0);
        lines.push(format!(
            "{:<4} {} score {:>4} (best {:>4})  iq {:>5.2}  time {:>4.1}  path {:>4.1}  food {}  flags {}{}",
            s.team,
            color,
            s.score.raw_score,
            high,
            s.score.intelligence_score,
            s.score.time_efficiency,
            s.score.path_efficiency,
            s.score.food_collected,
            s.score.flags_reached,
            if s.protected { "  [protected]" } else { "" },
        ));
    }

    if snapshot.outcome.is_terminal() {
        lines.push(snapshot.result.clone());
    }
    lines
}
