//! Per-team score cards.

use gp_behavior::DecisionStats;

/// Points for eating one food.
pub const FOOD_POINTS: u32 = 10;
/// Points for reaching the own flag after all food is gone.
pub const FLAG_POINTS: u32 = 100;
/// Elapsed seconds at which time efficiency reaches zero.
pub const TIME_HORIZON_SECS: f64 = 300.0;

/// Running score of one team.
///
/// `time_efficiency` and `path_efficiency` are stored on the 0-10 scale the
/// score display uses.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    pub raw_score:          u32,
    pub intelligence_score: f64,
    pub time_efficiency:    f64,
    pub path_efficiency:    f64,
    pub food_collected:     u32,
    pub flags_reached:      u32,
}

impl ScoreCard {
    /// Recompute the derived fields from the seeker's counters.
    pub fn refresh(&mut self, stats: &DecisionStats, elapsed_secs: f64) {
        let time = time_efficiency(elapsed_secs);
        self.intelligence_score = simulation_intelligence(stats, elapsed_secs);
        self.time_efficiency = time * 10.0;
        self.path_efficiency = stats.path_efficiency() * 10.0;
    }

    /// End-of-game adjustment: one point off per elapsed minute, floored at 0.
    pub fn apply_time_penalty(&mut self, elapsed_secs: f64) {
        let minutes = (elapsed_secs / 60.0).max(0.0);
        self.intelligence_score = (self.intelligence_score - minutes).max(0.0);
    }
}

fn time_efficiency(elapsed_secs: f64) -> f64 {
    (1.0 - elapsed_secs / TIME_HORIZON_SECS).clamp(0.0, 1.0)
}

/// The simulation's intelligence score:
/// `10 · (0.3·time + 0.4·path + 0.2·decision quality + 0.1·safety)`.
///
/// This is not [`DecisionStats::intelligence_score`], which ignores time and
/// weighs the same counters differently.
pub fn simulation_intelligence(stats: &DecisionStats, elapsed_secs: f64) -> f64 {
    10.0 * (0.3 * time_efficiency(elapsed_secs)
        + 0.4 * stats.path_efficiency()
        + 0.2 * stats.decision_quality()
        + 0.1 * stats.safety_score())
}
