//! The `Simulation` struct and its tick loop.

use std::collections::{BTreeMap, BTreeSet};

use gp_behavior::{ChaserAgent, Policy, SeekerAgent, TickContext};
use gp_core::{AgentRng, Cell, ChaserId, FlagId, SimClock, SimConfig, Tick};
use gp_grid::{AStar, Grid, Pathfinder};
use tracing::{debug, info};

use crate::score::{FLAG_POINTS, FOOD_POINTS};
use crate::{ChaserView, NoopObserver, Outcome, ScoreCard, SeekerView, SimObserver, Snapshot};

// ── Simulation ────────────────────────────────────────────────────────────────

/// One game in progress.
///
/// Per-agent state lives in parallel `Vec`s indexed by spawn order:
/// `seekers[i]`, `seeker_positions[i]`, `seeker_rngs[i]` and `scores[i]`
/// all describe seeker `i`; the chaser vectors work the same way.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: Pathfinder = AStar> {
    pub(crate) config:            SimConfig,
    pub(crate) clock:             SimClock,
    pub(crate) tick:              Tick,
    pub(crate) grid:              Grid,
    pub(crate) pathfinder:        P,
    pub(crate) seekers:           Vec<SeekerAgent>,
    pub(crate) seeker_positions:  Vec<Cell>,
    pub(crate) seeker_rngs:       Vec<AgentRng>,
    pub(crate) chasers:           Vec<ChaserAgent>,
    pub(crate) chaser_positions:  Vec<Cell>,
    pub(crate) chaser_rngs:       Vec<AgentRng>,
    pub(crate) scores:            Vec<ScoreCard>,
    pub(crate) protected_teams:   BTreeSet<FlagId>,
    pub(crate) protected_chasers: BTreeSet<ChaserId>,
    pub(crate) outcome:           Outcome,
    pub(crate) result:            String,
    pub(crate) high_scores:       BTreeMap<FlagId, u32>,
}

impl<P: Pathfinder> Simulation<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick without callbacks.
    pub fn step(&mut self) -> Outcome {
        self.step_observed(&mut NoopObserver)
    }

    /// Advance one tick, reporting to `observer`.  A no-op on a finished game.
    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let now = self.tick;
        observer.on_tick_start(now);
        self.process_tick(now, observer);
        self.tick = now + 1;

        if self.outcome.is_terminal() {
            self.finish();
        }

        let snapshot = self.snapshot();
        observer.on_tick_end(&snapshot);
        if self.outcome.is_terminal() {
            observer.on_game_over(&snapshot);
        }
        self.outcome
    }

    /// Step until the game ends or `config.max_ticks` ticks have run.
    ///
    /// Without a tick cap this only returns once the game is decided.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Outcome {
        while !self.outcome.is_terminal() {
            if self.config.max_ticks.is_some_and(|cap| self.tick.0 >= cap) {
                debug!(tick = %self.tick, "tick cap reached");
                break;
            }
            self.step_observed(observer);
        }
        self.outcome
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let seekers = self
            .seekers
            .iter()
            .zip(&self.seeker_positions)
            .zip(&self.scores)
            .map(|((s, &cell), score)| SeekerView {
                id:        s.id(),
                team:      s.flag().clone(),
                cell,
                color:     s.color(),
                protected: s.is_protected(),
                score:     score.clone(),
            })
            .collect();
        let chasers = self
            .chasers
            .iter()
            .zip(&self.chaser_positions)
            .map(|(c, &cell)| ChaserView {
                id:        c.id(),
                cell,
                color:     c.color(),
                protected: c.is_protected(),
            })
            .collect();

        Snapshot {
            tick:           self.tick,
            outcome:        self.outcome,
            result:         self.result.clone(),
            seekers,
            chasers,
            food_remaining: self.grid.food_count(),
            high_scores:    self.high_scores.clone(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks processed.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seekers(&self) -> &[SeekerAgent] {
        &self.seekers
    }

    pub fn seeker_positions(&self) -> &[Cell] {
        &self.seeker_positions
    }

    pub fn chasers(&self) -> &[ChaserAgent] {
        &self.chasers
    }

    pub fn chaser_positions(&self) -> &[Cell] {
        &self.chaser_positions
    }

    /// Score cards in seeker spawn order.
    pub fn scores(&self) -> &[ScoreCard] {
        &self.scores
    }

    pub fn score(&self, team: &FlagId) -> Option<&ScoreCard> {
        let i = self.seekers.iter().position(|s| s.flag() == team)?;
        self.scores.get(i)
    }

    pub fn protected_teams(&self) -> &BTreeSet<FlagId> {
        &self.protected_teams
    }

    pub fn protected_chasers(&self) -> &BTreeSet<ChaserId> {
        &self.protected_chasers
    }

    pub fn high_scores(&self) -> &BTreeMap<FlagId, u32> {
        &self.high_scores
    }

    /// Seconds elapsed according to the configured clock.
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs(self.tick)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // ⓪ Contact carried over from the previous state.
        if self.check_collision() {
            return;
        }

        // ① Chasers.
        self.move_chasers(now);

        // ② Every chaser has moved; seekers see the same positions.
        for seeker in &mut self.seekers {
            seeker.observe_chasers(&self.chaser_positions);
        }

        // ③ Seekers, in spawn order.  Later seekers see food eaten earlier
        // in the same tick.
        self.move_seekers(now, observer);

        // ④ / ⑤
        if self.check_collision() {
            return;
        }
        if self.protected_teams.len() == self.seekers.len() {
            self.outcome = Outcome::Victory;
            self.result = format!(
                "VICTORY! Victory after {} ticks: every seeker reached its flag",
                now.0 + 1
            );
            info!(tick = %now, "all seekers protected");
        }
    }

    fn move_chasers(&mut self, now: Tick) {
        let ctx = TickContext::new(now, &self.grid, &self.pathfinder);
        let agents = self
            .chasers
            .iter_mut()
            .zip(self.chaser_positions.iter_mut())
            .zip(self.chaser_rngs.iter_mut());

        for ((chaser, pos), rng) in agents {
            let delta = chaser.choose_action(*pos, &ctx, rng);
            let target = pos.offset(delta);
            if !ctx.grid.is_valid(target) {
                continue;
            }
            *pos = target;

            if ctx.grid.is_flag(target) && chaser.protect() {
                self.protected_chasers.insert(chaser.id());
                info!(chaser = %chaser.id(), cell = %target, "chaser protected on flag");
            }
        }
    }

    fn move_seekers<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let elapsed = self.clock.elapsed_secs(now + 1);

        for i in 0..self.seekers.len() {
            let pos = self.seeker_positions[i];
            let delta = {
                let ctx = TickContext::new(now, &self.grid, &self.pathfinder);
                self.seekers[i].choose_action(pos, &ctx, &mut self.seeker_rngs[i])
            };

            let seeker = &mut self.seekers[i];
            let speed = if seeker.is_protected() { 2 } else { 1 };
            let target = pos.offset(delta.scaled(speed));
            if seeker.is_protected() || !self.grid.is_valid(target) {
                continue;
            }
            self.seeker_positions[i] = target;

            let card = &mut self.scores[i];
            if self.grid.consume_food(target) {
                card.raw_score += FOOD_POINTS;
                card.food_collected += 1;
                info!(team = %seeker.flag(), cell = %target, score = card.raw_score, "food eaten");
                observer.on_food_eaten(now, seeker.flag(), target);
            }

            if self.grid.food_count() == 0 && self.grid.is_goal(target, seeker.flag()) {
                card.raw_score += FLAG_POINTS;
                card.flags_reached += 1;
                seeker.protect();
                self.protected_teams.insert(seeker.flag().clone());
                info!(team = %seeker.flag(), cell = %target, score = card.raw_score, "flag reached");
                observer.on_flag_reached(now, seeker.flag(), target);
            }

            card.refresh(seeker.stats(), elapsed);
            debug!(team = %seeker.flag(), from = %pos, to = %target, "seeker moved");
        }
    }

    /// Mark the game lost if any unprotected seeker shares a cell with an
    /// unprotected chaser.
    fn check_collision(&mut self) -> bool {
        for (seeker, &cell) in self.seekers.iter().zip(&self.seeker_positions) {
            if seeker.is_protected() {
                continue;
            }
            let catcher = self
                .chasers
                .iter()
                .zip(&self.chaser_positions)
                .position(|(chaser, &at)| at == cell && !chaser.is_protected());

            if let Some(j) = catcher {
                self.outcome = Outcome::Defeat;
                self.result = format!(
                    "GAME OVER! Seeker {} caught by ghost {} at {}",
                    seeker.flag(),
                    j + 1,
                    cell
                );
                info!(team = %seeker.flag(), chaser = j, %cell, "seeker caught");
                return true;
            }
        }
        false
    }

    fn finish(&mut self) {
        let elapsed = self.clock.elapsed_secs(self.tick);
        for (seeker, card) in self.seekers.iter().zip(&mut self.scores) {
            let best = self.high_scores.entry(seeker.flag().clone()).or_insert(0);
            *best = (*best).max(card.raw_score);
            card.apply_time_penalty(elapsed);
        }
        info!(
            outcome = %self.outcome,
            ticks = self.tick.0,
            elapsed_secs = elapsed,
            result = %self.result,
            "game over"
        );
    }
}
