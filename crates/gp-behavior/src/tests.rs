//! Unit tests for gp-behavior.
//!
//! Grids are built with `GridBuilder` so each test states exactly which
//! cells matter.  Randomness is scripted through `ScriptedRng`.

#[cfg(test)]
mod helpers {
    use gp_core::{Cell, FlagId, Rgb, SeekerId};
    use gp_grid::{Grid, GridBuilder};

    use crate::SeekerAgent;

    pub fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    /// Open `w x h` grid with one team: seeker, flag F1 and chaser spawn at
    /// the given cells, plus the listed food.
    pub fn open_grid(w: i32, h: i32, seeker: Cell, flag: Cell, chaser: Cell, food: &[Cell]) -> Grid {
        let mut b = GridBuilder::new(w, h)
            .seeker(seeker, "F1".into())
            .flag(flag, "F1".into())
            .chaser(chaser);
        for &f in food {
            b = b.food(f);
        }
        b.build().unwrap()
    }

    pub fn seeker_for(grid: &Grid) -> SeekerAgent {
        let flag = FlagId::new("F1");
        let cell = grid.flag_cell(&flag).unwrap();
        SeekerAgent::new(SeekerId(0), flag, cell, Rgb::YELLOW)
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Chaser ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod chaser {
    use gp_core::{ChaserId, Delta, Rgb, ScriptedRng, Tick};
    use gp_grid::{AStar, GridBuilder};

    use super::helpers::{c, open_grid};
    use crate::{ChaserAgent, Policy, TickContext};

    #[test]
    fn walled_in_chaser_stays_put() {
        let grid = GridBuilder::new(5, 3)
            .wall(c(1, 0))
            .wall(c(0, 1))
            .wall(c(2, 1))
            .wall(c(1, 2))
            .chaser(c(1, 1))
            .seeker(c(4, 0), "F1".into())
            .flag(c(4, 2), "F1".into())
            .build()
            .unwrap();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut chaser = ChaserAgent::new(ChaserId(0), Rgb::CHASER);
        for script in 0..4 {
            let mut rng = ScriptedRng::new(vec![script]);
            assert_eq!(chaser.choose_action(c(1, 1), &ctx, &mut rng), Delta::ZERO);
        }
    }

    #[test]
    fn corridor_end_has_one_move() {
        let grid = open_grid(3, 1, c(2, 0), c(2, 0), c(0, 0), &[]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut chaser = ChaserAgent::new(ChaserId(0), Rgb::CHASER);
        let mut rng = ScriptedRng::new(vec![3]);
        assert_eq!(chaser.choose_action(c(0, 0), &ctx, &mut rng), Delta::new(1, 0));
    }

    #[test]
    fn scripted_pick_follows_direction_order() {
        let grid = open_grid(3, 3, c(0, 0), c(2, 2), c(1, 1), &[]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut chaser = ChaserAgent::new(ChaserId(0), Rgb::CHASER);
        // Up, Right, Down, Left are all legal from the centre.
        let expected = [Delta::new(0, -1), Delta::new(1, 0), Delta::new(0, 1), Delta::new(-1, 0)];
        for (i, want) in expected.into_iter().enumerate() {
            let mut rng = ScriptedRng::new(vec![i]);
            assert_eq!(chaser.choose_action(c(1, 1), &ctx, &mut rng), want);
        }
    }

    #[test]
    fn protection_is_sticky() {
        let mut chaser = ChaserAgent::new(ChaserId(2), Rgb::CHASER);
        assert!(!chaser.is_protected());
        assert!(chaser.protect());
        assert!(!chaser.protect());
        assert!(chaser.is_protected());
        assert_eq!(chaser.id(), ChaserId(2));
    }
}

// ── Threat model ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod threat {
    use gp_core::{ChaserId, Delta, ScriptedRng};
    use gp_grid::GridBuilder;

    use super::helpers::{c, open_grid};
    use crate::ThreatModel;

    #[test]
    fn first_sighting_has_no_heading() {
        let mut threats = ThreatModel::new();
        threats.observe(&[c(1, 1)]);
        assert_eq!(threats.chaser_count(), 1);
        assert_eq!(threats.last_seen(ChaserId(0)), Some(c(1, 1)));
        assert_eq!(threats.heading(ChaserId(0)), None);
    }

    #[test]
    fn heading_survives_standing_still() {
        let mut threats = ThreatModel::new();
        threats.observe(&[c(0, 0), c(4, 4)]);
        threats.observe(&[c(1, 0), c(4, 3)]);
        threats.observe(&[c(1, 0), c(4, 2)]);
        assert_eq!(threats.heading(ChaserId(0)), Some(Delta::new(1, 0)));
        assert_eq!(threats.heading(ChaserId(1)), Some(Delta::new(0, -1)));
    }

    #[test]
    fn prediction_turns_at_walls() {
        let grid = open_grid(5, 2, c(0, 1), c(1, 1), c(0, 0), &[]);
        let mut rng = ScriptedRng::first();
        let path = ThreatModel::predict_path(&grid, c(3, 0), Delta::new(1, 0), &mut rng);
        assert_eq!(path, vec![c(4, 0), c(4, 1), c(4, 0)]);
    }

    #[test]
    fn prediction_stops_at_dead_end() {
        let grid = GridBuilder::new(3, 3)
            .wall(c(1, 0))
            .wall(c(0, 1))
            .wall(c(2, 1))
            .wall(c(1, 2))
            .chaser(c(1, 1))
            .seeker(c(0, 0), "F1".into())
            .flag(c(2, 2), "F1".into())
            .build()
            .unwrap();
        let mut rng = ScriptedRng::first();
        let path = ThreatModel::predict_path(&grid, c(1, 1), Delta::new(1, 0), &mut rng);
        assert!(path.is_empty());
    }

    #[test]
    fn safety_honours_lookahead() {
        let grid = open_grid(5, 2, c(0, 1), c(1, 1), c(0, 0), &[]);
        let mut threats = ThreatModel::new();
        threats.observe(&[c(0, 0)]);
        threats.observe(&[c(1, 0)]);
        let mut rng = ScriptedRng::first();

        // Predicted path: (2,0), (3,0), (4,0).
        assert!(!threats.is_safe(&grid, c(3, 0), 2, &mut rng));
        assert!(threats.is_safe(&grid, c(4, 0), 2, &mut rng));
        assert!(!threats.is_safe(&grid, c(4, 0), 3, &mut rng));
        assert!(threats.is_safe(&grid, c(3, 1), 3, &mut rng));
        // Adjacent is always unsafe.
        assert!(!threats.is_safe(&grid, c(1, 1), 3, &mut rng));
    }

    #[test]
    fn no_chasers_means_everything_safe() {
        let grid = open_grid(3, 1, c(0, 0), c(2, 0), c(1, 0), &[]);
        let threats = ThreatModel::new();
        let mut rng = ScriptedRng::first();
        assert_eq!(threats.min_distance(c(0, 0)), None);
        assert!(threats.is_safe(&grid, c(1, 0), 3, &mut rng));
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::helpers::{approx, c, open_grid, seeker_for};
    use crate::DecisionStats;

    #[test]
    fn fresh_seeker_reports_neutral_metrics() {
        let grid = open_grid(3, 1, c(0, 0), c(2, 0), c(1, 0), &[]);
        let seeker = seeker_for(&grid);
        let stats = seeker.stats();
        assert_eq!(stats.path_efficiency(), 0.0);
        assert_eq!(stats.decision_quality(), 0.0);
        assert_eq!(stats.safety_score(), 1.0);
        assert_eq!(stats.intelligence_score(), 0.0);
    }

    #[test]
    fn mixed_decisions() {
        let mut stats = DecisionStats::new();
        stats.record_step(1.0);
        stats.record_encounter();
        assert_eq!(stats.total_decisions, 2);
        assert!(approx(stats.path_efficiency(), 0.5));
        assert!(approx(stats.decision_quality(), 0.5));
        assert!(approx(stats.safety_score(), 0.5));
        assert!(approx(stats.intelligence_score(), 5.0));
    }

    #[test]
    fn stuck_is_an_encounter_without_a_decision() {
        let mut stats = DecisionStats::new();
        stats.record_stuck();
        assert_eq!((stats.total_decisions, stats.ghost_encounters), (0, 1));
        assert_eq!(stats.safety_score(), 1.0);
        assert_eq!(stats.intelligence_score(), 0.0);
    }

    #[test]
    fn perfect_run_scores_ten() {
        let mut stats = DecisionStats::new();
        for _ in 0..5 {
            stats.record_step(1.0);
        }
        assert!(approx(stats.intelligence_score(), 10.0));
    }
}

// ── Seeker ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seeker {
    use gp_core::{Delta, ScriptedRng, Tick};
    use gp_grid::{AStar, GridBuilder};

    use super::helpers::{approx, c, open_grid, seeker_for};
    use crate::{Policy, TickContext};

    const LEFT:  Delta = Delta::new(-1, 0);
    const RIGHT: Delta = Delta::new(1, 0);
    const DOWN:  Delta = Delta::new(0, 1);

    #[test]
    fn protected_seeker_never_moves() {
        let grid = open_grid(5, 3, c(0, 0), c(4, 2), c(4, 0), &[c(2, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        assert!(seeker.protect());
        assert!(!seeker.protect());
        let mut rng = ScriptedRng::first();
        for _ in 0..5 {
            assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), Delta::ZERO);
        }
        assert_eq!(seeker.stats().total_decisions, 0);
    }

    #[test]
    fn follows_shortest_path_to_food() {
        let grid = open_grid(5, 3, c(0, 0), c(4, 2), c(4, 0), &[c(2, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), RIGHT);
        assert_eq!(seeker.planned_path().collect::<Vec<_>>(), vec![c(1, 0), c(2, 0)]);
        assert_eq!(seeker.choose_action(c(1, 0), &ctx, &mut rng), RIGHT);
        assert_eq!(seeker.planned_path().collect::<Vec<_>>(), vec![c(2, 0)]);

        let stats = seeker.stats();
        assert_eq!(stats.total_decisions, 2);
        assert_eq!(stats.good_decisions, 2);
        assert!(approx(stats.path_efficiency(), 1.0));
    }

    #[test]
    fn finished_plan_stays_cached_and_falls_back() {
        let mut grid = open_grid(5, 1, c(0, 0), c(4, 0), c(3, 0), &[c(1, 0)]);
        let mut seeker = seeker_for(&grid);
        let mut rng = ScriptedRng::first();

        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), RIGHT);
        assert!(grid.consume_food(c(1, 0)));

        // Standing on the end of the plan: nothing left to follow.
        let ctx = TickContext::new(Tick(1), &grid, &AStar);
        assert_eq!(seeker.choose_action(c(1, 0), &ctx, &mut rng), RIGHT);
        assert_eq!(seeker.planned_path().collect::<Vec<_>>(), vec![c(1, 0)]);

        let stats = seeker.stats();
        assert_eq!(stats.total_decisions, 2);
        assert_eq!(stats.good_decisions, 2);
        assert_eq!(stats.efficiency_sum, 1.0);
        assert!(approx(stats.path_efficiency(), 0.5));
    }

    #[test]
    fn equal_food_ties_go_to_row_major_first() {
        let grid = open_grid(5, 3, c(2, 0), c(2, 2), c(0, 2), &[c(0, 0), c(4, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        let mut rng = ScriptedRng::first();
        assert_eq!(seeker.choose_action(c(2, 0), &ctx, &mut rng), LEFT);
    }

    #[test]
    fn prefers_food_away_from_chasers() {
        let grid = open_grid(5, 3, c(2, 0), c(2, 2), c(0, 2), &[c(0, 0), c(4, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(0, 2)]);
        let mut rng = ScriptedRng::first();
        assert_eq!(seeker.choose_action(c(2, 0), &ctx, &mut rng), RIGHT);
    }

    /// ```text
    ///  A S . . . B .     A (0,0), seeker (1,0), B (5,0)
    ///  . . . . . . .
    ///  . . . . . . .
    ///  G . . . . . .     chaser seen at (0,4), then (0,3)
    ///  . . . . . . F
    /// ```
    fn interception_grid() -> gp_grid::Grid {
        open_grid(7, 5, c(1, 0), c(6, 4), c(0, 4), &[c(0, 0), c(5, 0)])
    }

    #[test]
    fn stationary_chaser_leaves_near_food_best() {
        let grid = interception_grid();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(0, 3)]);
        let mut rng = ScriptedRng::first();

        // 0.6/2 + 0.4*3/12 = 0.4 beats 0.6/5 + 0.4*8/12 ~ 0.387.
        assert_eq!(seeker.choose_action(c(1, 0), &ctx, &mut rng), LEFT);
        assert_eq!(seeker.planned_path().last(), Some(c(0, 0)));
    }

    #[test]
    fn food_on_predicted_chaser_path_is_penalised() {
        let grid = interception_grid();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        // Heading up: predicted (0,2), (0,1), (0,0).
        seeker.observe_chasers(&[c(0, 4)]);
        seeker.observe_chasers(&[c(0, 3)]);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(1, 0), &ctx, &mut rng), RIGHT);
        assert_eq!(seeker.planned_path().last(), Some(c(5, 0)));
    }

    #[test]
    fn escapes_to_safe_neighbour() {
        let grid = open_grid(5, 3, c(0, 0), c(4, 2), c(1, 0), &[c(4, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(1, 0)]);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), DOWN);
        let stats = seeker.stats();
        assert_eq!(stats.total_decisions, 1);
        assert_eq!(stats.ghost_encounters, 1);
    }

    #[test]
    fn escape_without_safe_cell_maximises_distance() {
        let grid = open_grid(5, 3, c(0, 0), c(4, 2), c(1, 0), &[c(4, 0)]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(1, 0), c(0, 2)]);
        let mut rng = ScriptedRng::first();

        // Right lands on a chaser; down keeps distance 1.
        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), DOWN);
        assert_eq!(seeker.stats().ghost_encounters, 1);
    }

    #[test]
    fn holds_on_flag_once_food_is_gone() {
        let grid = open_grid(3, 1, c(0, 0), c(2, 0), c(1, 0), &[]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(1, 0)]);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(2, 0), &ctx, &mut rng), Delta::ZERO);
        let stats = seeker.stats();
        assert_eq!(stats.good_decisions, 1);
        assert!(approx(stats.path_efficiency(), 1.0));
    }

    #[test]
    fn unreachable_goal_falls_back_to_safe_move() {
        let grid = GridBuilder::new(4, 1)
            .seeker(c(0, 0), "F1".into())
            .wall(c(2, 0))
            .flag(c(3, 0), "F1".into())
            .chaser(c(1, 0))
            .build()
            .unwrap();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), RIGHT);
        let stats = seeker.stats();
        assert_eq!(stats.good_decisions, 1);
        assert_eq!(stats.efficiency_sum, 0.0);
    }

    #[test]
    fn risky_plan_is_discarded_for_fallback() {
        let grid = open_grid(5, 1, c(0, 0), c(4, 0), c(2, 0), &[]);
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        seeker.observe_chasers(&[c(2, 0)]);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), RIGHT);
        assert_eq!(seeker.planned_path().count(), 0);
        let stats = seeker.stats();
        assert_eq!(stats.ghost_encounters, 1);
        assert_eq!(stats.good_decisions, 0);
    }

    #[test]
    fn boxed_in_seeker_stays_and_counts_encounter() {
        let grid = GridBuilder::new(3, 1)
            .seeker(c(0, 0), "F1".into())
            .wall(c(1, 0))
            .flag(c(2, 0), "F1".into())
            .chaser(c(2, 0))
            .build()
            .unwrap();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), Delta::ZERO);
        let stats = seeker.stats();
        assert_eq!(stats.ghost_encounters, 1);
        assert_eq!(stats.total_decisions, 0);
        assert_eq!(stats.safety_score(), 1.0);
    }

    #[test]
    fn cornered_escape_counts_encounter_only() {
        let grid = GridBuilder::new(3, 1)
            .seeker(c(0, 0), "F1".into())
            .wall(c(1, 0))
            .flag(c(2, 0), "F1".into())
            .chaser(c(2, 0))
            .build()
            .unwrap();
        let ctx = TickContext::new(Tick::ZERO, &grid, &AStar);
        let mut seeker = seeker_for(&grid);
        // A chaser on the seeker's own cell makes it unsafe.
        seeker.observe_chasers(&[c(0, 0)]);
        let mut rng = ScriptedRng::first();

        assert_eq!(seeker.choose_action(c(0, 0), &ctx, &mut rng), Delta::ZERO);
        let stats = seeker.stats();
        assert_eq!(stats.ghost_encounters, 1);
        assert_eq!(stats.total_decisions, 0);
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod factory {
    use gp_core::{ChaserId, FlagId, Rgb, SeekerId};
    use gp_grid::{GridError, parse_map};

    use crate::{AgentFactory, BehaviorError};

    #[test]
    fn seeker_colours_cycle() {
        let grid = parse_map("P1P2P3\nF1F2F3\nGGG").unwrap();
        let mut factory = AgentFactory::new(vec![Rgb::YELLOW, Rgb::CYAN]).unwrap();

        let a = factory.create_seeker(&grid, FlagId::new("F1")).unwrap();
        let b = factory.create_seeker(&grid, FlagId::new("F2")).unwrap();
        let d = factory.create_seeker(&grid, FlagId::new("F3")).unwrap();
        assert_eq!((a.color(), b.color(), d.color()), (Rgb::YELLOW, Rgb::CYAN, Rgb::YELLOW));
        assert_eq!(d.id(), SeekerId(2));
        assert_eq!(b.flag_cell(), gp_core::Cell::new(1, 1));

        let g0 = factory.create_chaser();
        let g1 = factory.create_chaser();
        assert_eq!(g0.color(), Rgb::CHASER);
        assert_eq!(g1.id(), ChaserId(1));
    }

    #[test]
    fn empty_palette_rejected() {
        let err = AgentFactory::new(Vec::<Rgb>::new()).unwrap_err();
        assert!(matches!(err, BehaviorError::EmptyPalette));
    }

    #[test]
    fn unknown_flag_is_a_grid_error() {
        let grid = parse_map("P1F1G").unwrap();
        let mut factory = AgentFactory::with_default_palette();
        let err = factory.create_seeker(&grid, FlagId::new("F9")).unwrap_err();
        assert!(matches!(err, BehaviorError::Grid(GridError::UnknownFlag(_))));
    }
}
