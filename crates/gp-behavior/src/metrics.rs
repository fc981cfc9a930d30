//! Decision counters kept by each seeker and the scores derived from them.

/// Cumulative decision counters for one seeker.
///
/// | Metric               | Value with no decisions | Otherwise                        |
/// |----------------------|-------------------------|----------------------------------|
/// | `path_efficiency`    | 0                       | efficiency sum / decisions       |
/// | `decision_quality`   | 0                       | good / decisions                 |
/// | `safety_score`       | 1                       | 1 − encounters / decisions       |
/// | `intelligence_score` | 0                       | 10·(0.5·dq + 0.3·safety + 0.2·pe), clamped to 0..10 |
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionStats {
    pub total_decisions:  u32,
    pub good_decisions:   u32,
    pub ghost_encounters: u32,
    pub efficiency_sum:   f64,
}

impl DecisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A planned step or a hold on the flag.
    pub fn record_step(&mut self, efficiency: f64) {
        self.total_decisions += 1;
        self.good_decisions += 1;
        self.efficiency_sum += efficiency.clamp(0.0, 1.0);
    }

    /// A fallback move onto a safe cell.
    pub fn record_safe_move(&mut self) {
        self.total_decisions += 1;
        self.good_decisions += 1;
    }

    /// An escape or an unsafe fallback.
    pub fn record_encounter(&mut self) {
        self.total_decisions += 1;
        self.ghost_encounters += 1;
    }

    /// No legal move.  An encounter, but not a decision.
    pub fn record_stuck(&mut self) {
        self.ghost_encounters += 1;
    }

    pub fn path_efficiency(&self) -> f64 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        self.efficiency_sum / f64::from(self.total_decisions)
    }

    pub fn decision_quality(&self) -> f64 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        f64::from(self.good_decisions) / f64::from(self.total_decisions)
    }

    pub fn safety_score(&self) -> f64 {
        if self.total_decisions == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.ghost_encounters) / f64::from(self.total_decisions)
    }

    /// Agent-local composite.  Distinct from the simulation's score card
    /// formula, which also weighs elapsed time.
    pub fn intelligence_score(&self) -> f64 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        let raw = 10.0
            * (0.5 * self.decision_quality()
                + 0.3 * self.safety_score()
                + 0.2 * self.path_efficiency());
        raw.clamp(0.0, 10.0)
    }
}
