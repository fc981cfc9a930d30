//! `gp-grid`: the static map, its food set, and pathfinding.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`grid`]  | `Grid`, `GridBuilder`, `Flag`, `SeekerSpawn`                |
//! | [`map`]   | `parse_map`, `load_map_file` (text map format)              |
//! | [`path`]  | `Pathfinder` trait, `AStar`                                 |
//! | [`error`] | `GridError`, `GridResult<T>`                                |

pub mod error;
pub mod grid;
pub mod map;
pub mod path;


pub use error::{GridError, GridResult};
pub use grid::{Flag, Grid, GridBuilder, SeekerSpawn};
pub use map::{load_map_file, parse_map};
pub use path::{AStar, Pathfinder};
