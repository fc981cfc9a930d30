//! Owned post-tick views handed to observers and renderers.

use std::collections::BTreeMap;
use std::fmt;

use gp_core::{Cell, ChaserId, FlagId, Rgb, SeekerId, Tick};

use crate::ScoreCard;

/// Game state machine.  `Victory` and `Defeat` are absorbing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    #[default]
    Running,
    Victory,
    Defeat,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Running => "running",
            Outcome::Victory => "victory",
            Outcome::Defeat  => "defeat",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekerView {
    pub id:        SeekerId,
    pub team:      FlagId,
    pub cell:      Cell,
    pub color:     Rgb,
    pub protected: bool,
    pub score:     ScoreCard,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaserView {
    pub id:        ChaserId,
    pub cell:      Cell,
    pub color:     Rgb,
    pub protected: bool,
}

/// Everything a renderer or writer needs about one tick, decoupled from the
/// live simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Number of ticks processed so far.
    pub tick:           Tick,
    pub outcome:        Outcome,
    /// Free-text result; empty while running.
    pub result:         String,
    pub seekers:        Vec<SeekerView>,
    pub chasers:        Vec<ChaserView>,
    pub food_remaining: usize,
    pub high_scores:    BTreeMap<FlagId, u32>,
}

impl Snapshot {
    pub fn seeker(&self, team: &FlagId) -> Option<&SeekerView> {
        self.seekers.iter().find(|s| &s.team == team)
    }
}
