//! Plain data row types written by output backends.

use gp_sim::{SeekerView, Snapshot};

/// One team's score card after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub tick:               u64,
    pub team:               String,
    pub raw_score:          u32,
    pub intelligence_score: f64,
    pub time_efficiency:    f64,
    pub path_efficiency:    f64,
    pub food_collected:     u32,
    pub flags_reached:      u32,
    pub protected:          bool,
}

impl ScoreRow {
    pub fn from_view(tick: u64, view: &SeekerView) -> Self {
        Self {
            tick,
            team:               view.team.to_string(),
            raw_score:          view.score.raw_score,
            intelligence_score: view.score.intelligence_score,
            time_efficiency:    view.score.time_efficiency,
            path_efficiency:    view.score.path_efficiency,
            food_collected:     view.score.food_collected,
            flags_reached:      view.score.flags_reached,
            protected:          view.protected,
        }
    }
}

/// One team's line in the end-of-game summary.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRow {
    pub ticks:       u64,
    pub outcome:     &'static str,
    pub result:      String,
    pub team:        String,
    pub final_score: u32,
    pub high_score:  u32,
}

impl OutcomeRow {
    /// One row per team of a finished game.
    pub fn from_snapshot(snapshot: &Snapshot) -> Vec<Self> {
        snapshot
            .seekers
            .iter()
            .map(|s| OutcomeRow {
                ticks:       snapshot.tick.0,
                outcome:     snapshot.outcome.as_str(),
                result:      snapshot.result.clone(),
                team:        s.team.to_string(),
                final_score: s.score.raw_score,
                high_score:  snapshot.high_scores.get(&s.team).copied().unwrap_or(s.score.raw_score),
            })
            .collect()
    }
}
